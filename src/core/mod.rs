//! Core data — the version table and the shared stores.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so it can be shared across async tasks.

pub mod feed;
pub mod preferences;
pub mod version;
