//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// The next draw picks up the new size.
    Resize,
    Tick,
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        let has_event = event::poll(tick_rate).unwrap_or(false);
        let app_event = if has_event {
            match event::read() {
                Ok(CtEvent::Key(k)) => AppEvent::Key(k),
                Ok(CtEvent::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event read failed");
                    continue;
                }
            }
        } else {
            AppEvent::Tick
        };
        if tx.send(app_event).is_err() {
            break; // receiver dropped
        }
    });

    rx
}
