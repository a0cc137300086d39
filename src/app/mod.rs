//! Application orchestration — shared context, UI state, events, and input handling.

pub mod context;
pub mod event;
pub mod handler;
pub mod state;
