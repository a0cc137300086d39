//! In-memory user preferences shared across the view tree.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreferences {
    /// Show the author and work next to the version, not just the codename.
    pub show_thinker_details: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            show_thinker_details: true,
        }
    }
}

impl UserPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_thinker_details(&mut self) -> bool {
        self.show_thinker_details = !self.show_thinker_details;
        self.show_thinker_details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_default_on_and_toggle() {
        let mut prefs = UserPreferences::new();
        assert!(prefs.show_thinker_details);
        assert!(!prefs.toggle_thinker_details());
        assert!(prefs.toggle_thinker_details());
    }
}
