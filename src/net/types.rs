//! Shared DTOs for the client/server session boundary.
//!
//! DESIGN
//! ======
//! Mirrors the server's session payloads so serde decoding stays
//! lossless across the auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in portal user as reported by the session endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name shown in the dashboard header.
    pub name: String,
    /// Primary email address tied to the account.
    pub email: String,
}
