//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer reads the shared context and the per-session state and turns
//! them into cells on the terminal.  No state is created here.

pub mod about;
pub mod layout;
pub mod root;
pub mod theme;
