//! Shared client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! State lives in plain structs held by `RwSignal`s so pages and guards
//! read one source of truth instead of threading props through the tree.

pub mod auth;
