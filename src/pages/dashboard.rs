//! Dashboard page, the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Counterpart of the guest-only login route: unauthenticated sessions
//! are bounced to `/login`, including a logout happening after mount.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthSession;
use crate::util::guard;

/// Display label for the session identity shown in the header.
fn identity_label(state: &AuthSession) -> String {
    state
        .user
        .as_ref()
        .map_or_else(|| "guest".to_owned(), |user| user.name.clone())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(auth, navigate);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            // Clearing the user lets the unauth redirect take over.
            auth.update(|session| session.user = None);
        });
    };

    view! {
        <Show
            when=move || {
                let session = auth.get();
                !session.loading && session.user.is_some()
            }
            fallback=|| view! { <p class="page-loading">"Loading session..."</p> }
        >
            <div class="dashboard-page">
                <header class="dashboard-header">
                    <h1>"Dashboard"</h1>
                    <div class="dashboard-header__session">
                        <span class="dashboard-header__identity">
                            {move || identity_label(&auth.get())}
                        </span>
                        <button class="dashboard-header__logout" on:click=on_logout>
                            "Log out"
                        </button>
                    </div>
                </header>
                <p class="dashboard-welcome">
                    {move || format!("Signed in as {}.", identity_label(&auth.get()))}
                </p>
            </div>
        </Show>
    }
}
