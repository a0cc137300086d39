//! Input handling — maps key events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Action;
use crate::core::version;

use super::state::{ActivePane, AppState};

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits, regardless of bindings.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if let Some(action) = state.config.match_key(key) {
        apply_action(state, action);
    }
}

pub fn apply_action(state: &mut AppState, action: Action) {
    tracing::trace!(?action, "apply action");
    match action {
        Action::Quit => state.should_quit = true,
        Action::SwitchPane => {
            state.active_pane = state.active_pane.next();
            state.status_message = None;
        }
        Action::ScrollUp => {
            if state.active_pane == ActivePane::About {
                state.lineage_offset = state.lineage_offset.saturating_sub(1);
            }
        }
        Action::ScrollDown => {
            if state.active_pane == ActivePane::About {
                let last = version::entries().len().saturating_sub(1);
                state.lineage_offset = (state.lineage_offset + 1).min(last);
            }
        }
        Action::RefreshFeed => {
            let revision = {
                let mut feed = state.ctx.feed_mut();
                feed.request_refresh(chrono::Utc::now());
                feed.revision()
            };
            state.status_message = Some(format!("Refresh requested (revision {revision})"));
        }
        Action::ToggleDetails => {
            let on = state.ctx.preferences_mut().toggle_thinker_details();
            state.status_message = Some(format!(
                "Thinker details {}",
                if on { "shown" } else { "hidden" }
            ));
        }
    }
}
