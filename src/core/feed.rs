//! Feed store — the shared handle the views read feed status from.
//!
//! Posts, ranking, and fetching live outside this crate.  The store only
//! records refresh requests so every view sees the same status.

use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct FeedStore {
    revision: u64,
    last_refresh: Option<DateTime<Utc>>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumped on every refresh request.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    /// Record a refresh request at `now`.
    pub fn request_refresh(&mut self, now: DateTime<Utc>) {
        self.revision = self.revision.wrapping_add(1);
        self.last_refresh = Some(now);
        tracing::debug!(revision = self.revision, "feed refresh requested");
    }

    /// One-line status for the feed pane.
    pub fn status_line(&self) -> String {
        match self.last_refresh() {
            Some(at) => format!(
                "revision {} · refreshed {}",
                self.revision,
                at.format("%Y-%m-%d %H:%M")
            ),
            None => "not refreshed yet".to_string(),
        }
    }
}
