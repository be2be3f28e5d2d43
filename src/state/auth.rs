//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session signal is provided by `app` and settled once by the
//! initial session fetch. Route guards consume it either as a predicate
//! or through `authentication_status`, the stream form used by the
//! one-shot guest gate.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use futures::Stream;
use futures::channel::mpsc;
use leptos::prelude::*;

use crate::net::types::User;

/// Session state shared through Leptos context.
#[derive(Clone, Debug)]
pub struct AuthSession {
    /// The signed-in user, absent for guests.
    pub user: Option<User>,
    /// True until the initial session fetch settles.
    pub loading: bool,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Settled authentication status: `None` while the session is still
/// loading, otherwise whether a user is present.
pub fn session_status(state: &AuthSession) -> Option<bool> {
    if state.loading {
        None
    } else {
        Some(state.user.is_some())
    }
}

/// Stream of authentication-status values for the shared session signal.
///
/// Emits once per settled state change, starting with the bootstrap
/// result. Consumers that only care about the current session take the
/// first value and drop the stream.
pub fn authentication_status(auth: RwSignal<AuthSession>) -> impl Stream<Item = bool> {
    let (tx, rx) = mpsc::unbounded();
    Effect::new(move || {
        if let Some(authenticated) = session_status(&auth.get()) {
            // Send fails only after the consumer dropped the stream.
            let _ = tx.unbounded_send(authenticated);
        }
    });
    rx
}
