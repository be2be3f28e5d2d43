//! Networking modules for the server HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the session REST calls and `types` defines the shared
//! wire schema.

pub mod api;
pub mod types;
