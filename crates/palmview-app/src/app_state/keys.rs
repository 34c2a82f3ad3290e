//! Keybind resolution for shell-forwarded key events.
//!
//! The shell forwards DOM `key` names (e.g. "F5", "Enter", "a"). Config
//! strings and incoming names are both normalized before lookup.

use std::collections::HashMap;

use palmview_config::schema::KeybindConfig;

/// A user-triggerable action resolvable from a keybind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Refresh,
    ToggleFullscreen,
}

/// Normalize a key name for lookup: single characters are uppercased,
/// named keys ("F5", "Enter", "Escape") pass through.
pub fn normalize_key(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_uppercase()
    } else {
        key.to_string()
    }
}

/// Maps normalized key names to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<String, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(normalize_key(&config.refresh), Action::Refresh);
        bindings.insert(
            normalize_key(&config.toggle_fullscreen),
            Action::ToggleFullscreen,
        );
        Self { bindings }
    }

    /// Resolve a shell-forwarded key name to an action.
    pub fn resolve(&self, key: &str) -> Option<Action> {
        self.bindings.get(&normalize_key(key)).copied()
    }

    /// The bound key names, for the shell's default-suppression list.
    pub fn bound_keys(&self) -> Vec<String> {
        self.bindings.keys().cloned().collect()
    }
}
