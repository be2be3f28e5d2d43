//! Route guards coordinating session state with navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two directions of protection: `guest_gate` keeps authenticated
//! sessions out of guest-only routes (login), and the unauth redirect
//! keeps guests out of authenticated routes (dashboard). Pages install
//! the matching guard on mount.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::pin::pin;

use futures::Stream;
use futures::StreamExt as _;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{self, AuthSession};

/// Landing route for authenticated sessions.
pub const AUTHENTICATED_LANDING_PATH: &str = "/dashboard";

/// Landing route for guests.
pub const GUEST_LANDING_PATH: &str = "/login";

/// Outcome of a route gate check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// The navigation may proceed.
    Permit,
    /// The navigation must be aborted; a redirect has been issued.
    Deny,
}

/// One-shot gate for guest-only routes.
///
/// Awaits the first value of `status` and decides: an unauthenticated
/// session may proceed, an authenticated one is redirected to the
/// dashboard and denied. Later `status` values are never observed; the
/// subscription ends when the first value arrives. A stream that closes
/// without yielding counts as unauthenticated. A stream that never
/// yields leaves the returned future pending.
pub async fn guest_gate<S, N>(status: S, navigate: N) -> GateDecision
where
    S: Stream<Item = bool>,
    N: FnOnce(&str),
{
    let mut status = pin!(status);
    let authenticated = status.next().await.unwrap_or(false);
    if authenticated {
        navigate(AUTHENTICATED_LANDING_PATH);
        GateDecision::Deny
    } else {
        GateDecision::Permit
    }
}

/// Install the guest gate for the current page.
///
/// Runs `guest_gate` against the shared session signal on the local task
/// queue; browser builds only, since the decision depends on the
/// client-side session bootstrap.
pub fn install_guest_redirect<F>(auth: RwSignal<AuthSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let status = auth::authentication_status(auth);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let decision = guest_gate(status, |path| navigate(path, NavigateOptions::default())).await;
        log::debug!("guest gate resolved: {decision:?}");
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (status, navigate);
    }
}

/// Whether a settled session without a user should leave a protected route.
pub fn should_redirect_unauth(state: &AuthSession) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
///
/// Re-runs on every session change, so a logout after the page mounted
/// also triggers the redirect.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(GUEST_LANDING_PATH, NavigateOptions::default());
        }
    });
}
