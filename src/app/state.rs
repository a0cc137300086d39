//! Central UI state.
//!
//! Shared application data (feed store, preferences) lives behind the
//! [`AppContext`]; everything here is per-session view state.  Rendering is a
//! pure function over `&AppState`, event handling mutates `&mut AppState`.

use crate::app::context::AppContext;
use crate::config::AppConfig;

/// Which pane of the root view has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Feed,
    About,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Feed => ActivePane::About,
            ActivePane::About => ActivePane::Feed,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    /// Shared stores, injected once at startup.
    pub ctx: AppContext,
    /// User-configurable keybindings.
    pub config: AppConfig,
    pub active_pane: ActivePane,
    /// First visible row of the version lineage on the about pane.
    pub lineage_offset: usize,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(ctx: AppContext, config: AppConfig) -> Self {
        Self {
            ctx,
            config,
            active_pane: ActivePane::default(),
            lineage_offset: 0,
            should_quit: false,
            status_message: None,
        }
    }
}
