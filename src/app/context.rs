//! Shared application context.
//!
//! Built once at startup and handed to the root view.  Views clone the
//! context (cheap `Arc` bumps) instead of constructing their own stores, so
//! every part of the tree reads and mutates the same feed store and
//! preferences for the whole process lifetime.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::{feed::FeedStore, preferences::UserPreferences};

#[derive(Debug, Clone)]
pub struct AppContext {
    feed: Arc<RwLock<FeedStore>>,
    preferences: Arc<RwLock<UserPreferences>>,
}

impl AppContext {
    /// Construct the single feed store and preferences instance.
    ///
    /// Call this exactly once, before the UI starts.
    pub fn bootstrap() -> Self {
        tracing::debug!("bootstrapping shared app state");
        Self {
            feed: Arc::new(RwLock::new(FeedStore::new())),
            preferences: Arc::new(RwLock::new(UserPreferences::new())),
        }
    }

    pub fn feed(&self) -> RwLockReadGuard<'_, FeedStore> {
        // A panic while holding the lock leaves plain data behind; keep using it.
        self.feed.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn feed_mut(&self) -> RwLockWriteGuard<'_, FeedStore> {
        self.feed.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn preferences(&self) -> RwLockReadGuard<'_, UserPreferences> {
        self.preferences.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn preferences_mut(&self) -> RwLockWriteGuard<'_, UserPreferences> {
        self.preferences.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Do two contexts share the same underlying instances?
    #[cfg(test)]
    pub fn shares_state_with(&self, other: &AppContext) -> bool {
        Arc::ptr_eq(&self.feed, &other.feed) && Arc::ptr_eq(&self.preferences, &other.preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_instances() {
        let ctx = AppContext::bootstrap();
        let view_ctx = ctx.clone();
        assert!(ctx.shares_state_with(&view_ctx));

        view_ctx.preferences_mut().show_thinker_details = false;
        assert!(!ctx.preferences().show_thinker_details);

        view_ctx.feed_mut().request_refresh(chrono::Utc::now());
        assert_eq!(ctx.feed().revision(), 1);
    }

    #[test]
    fn separate_bootstraps_are_distinct() {
        let a = AppContext::bootstrap();
        let b = AppContext::bootstrap();
        assert!(!a.shares_state_with(&b));
    }

    #[test]
    fn survives_poisoned_lock() {
        let ctx = AppContext::bootstrap();
        let poisoner = ctx.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.preferences_mut();
            panic!("poison the lock");
        })
        .join();

        ctx.preferences_mut().show_thinker_details = false;
        assert!(!ctx.preferences().show_thinker_details);
    }
}
