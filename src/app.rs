//! App shell: router, shared session context, and session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the `AuthSession` signal consumed by pages and route guards,
//! and settles it exactly once when the initial `/api/auth/me` fetch
//! completes in the browser.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthSession;

/// Root component wiring context, session bootstrap, and routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthSession::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        if user.is_none() {
            log::debug!("session bootstrap: no active session");
        }
        auth.set(AuthSession {
            user,
            loading: false,
        });
    });

    view! {
        <Title text="Portal"/>
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
