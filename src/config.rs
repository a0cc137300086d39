//! User configuration — keybindings and persistence.
//!
//! Bindings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/agentic-feed/config.toml` (default
//! `~/.config/agentic-feed/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `action = Key1, Key2`")]
    MissingEquals { line: usize },

    #[error("line {line}: unknown action `{action}`")]
    UnknownAction { line: usize, action: String },

    #[error("line {line}: cannot parse key `{key}`")]
    InvalidKey { line: usize, key: String },
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the root view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SwitchPane,
    ScrollUp,
    ScrollDown,
    RefreshFeed,
    ToggleDetails,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the help line and the file).
    pub const ALL: &[Action] = &[
        Action::SwitchPane,
        Action::ScrollUp,
        Action::ScrollDown,
        Action::RefreshFeed,
        Action::ToggleDetails,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::SwitchPane => "switch pane",
            Action::ScrollUp => "scroll up",
            Action::ScrollDown => "scroll down",
            Action::RefreshFeed => "refresh",
            Action::ToggleDetails => "details",
            Action::Quit => "quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::SwitchPane => "switch_pane",
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::RefreshFeed => "refresh_feed",
            Action::ToggleDetails => "toggle_details",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Display / config string (e.g. `"Alt+Up"`, `"Ctrl+c"`, `"q"`).
    pub fn to_config_string(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        // An uppercase letter already implies Shift.
        let shifted_letter = matches!(self.code, KeyCode::Char(c) if c.is_uppercase());
        if self.modifiers.contains(KeyModifiers::SHIFT) && !shifted_letter {
            s.push_str("Shift+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Tab"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            lower if lower.starts_with('f') && lower.len() > 1 => {
                let n: u8 = lower[1..].parse().ok()?;
                KeyCode::F(n)
            }
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        // Terminals report `R` as Char('R') + SHIFT, so `R` and `Shift+r`
        // both normalise to that pair.
        let code = match code {
            KeyCode::Char(c) if c.is_uppercase() => {
                modifiers |= KeyModifiers::SHIFT;
                KeyCode::Char(c)
            }
            KeyCode::Char(c) if c.is_lowercase() && modifiers.contains(KeyModifiers::SHIFT) => {
                KeyCode::Char(c.to_uppercase().next()?)
            }
            other => other,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(SwitchPane, vec![KeyBind::new(Tab, n)]);
        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(RefreshFeed, vec![KeyBind::new(Char('r'), n)]);
        m.insert(ToggleDetails, vec![KeyBind::new(Char('d'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  The binding with the most
    /// modifiers wins when several match.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action).and_then(|b| b.first()) {
            Some(bind) => bind.to_config_string(),
            None => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        [
            Action::SwitchPane,
            Action::RefreshFeed,
            Action::ToggleDetails,
            Action::Quit,
        ]
        .iter()
        .map(|&a| format!("{}: {}", self.short_binding(a), a.label()))
        .collect::<Vec<_>>()
        .join(" | ")
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default location.  A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    /// Rewrite the file at `path` in canonical form.  A file that fails to
    /// parse is left untouched and the parse error is returned.
    pub fn rewrite(path: &Path) -> anyhow::Result<Self> {
        let config = Self::load_from(path)?;
        config.save_to(path)?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse the config text.  Actions not mentioned keep their defaults.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let mut bindings = Self::default_bindings();

        for (idx, line) in s.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or(ConfigError::MissingEquals { line: line_no })?;
            let key = key.trim();

            let action = Action::from_config_key(key).ok_or_else(|| ConfigError::UnknownAction {
                line: line_no,
                action: key.to_string(),
            })?;

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                if part.is_empty() {
                    continue;
                }
                let bind = KeyBind::parse(part).ok_or_else(|| ConfigError::InvalidKey {
                    line: line_no,
                    key: part.to_string(),
                })?;
                parsed.push(bind);
            }
            if !parsed.is_empty() {
                bindings.insert(action, parsed);
            }
        }

        Ok(Self { bindings })
    }

    /// Persist current config to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# agentic-feed configuration".to_string(),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/agentic-feed/config.toml`).
pub fn config_path() -> PathBuf {
    config_path_from(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

/// Resolve the config path from already-read `XDG_CONFIG_HOME` and `HOME`.
/// Empty values count as unset.
fn config_path_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = home.filter(|v| !v.is_empty()).unwrap_or_else(|| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("agentic-feed").join("config.toml")
}
