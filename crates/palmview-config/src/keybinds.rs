//! Keybind validation utilities.

use std::collections::HashMap;

use palmview_common::ConfigError;

use crate::schema::KeybindConfig;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("refresh", &config.refresh),
        ("toggle_fullscreen", &config.toggle_fullscreen),
    ]
}

/// Validate that no two keybinds are mapped to the same key.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in &binds {
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        let config = KeybindConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn all_keybinds_returns_both_entries() {
        let config = KeybindConfig::default();
        let binds = all_keybinds(&config);
        assert_eq!(binds.len(), 2);
        let names: Vec<&str> = binds.iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"refresh"));
        assert!(names.contains(&"toggle_fullscreen"));
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            refresh: "F11".into(),
            toggle_fullscreen: "F11".into(),
        };
        let result = validate_no_duplicates(&config);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("F11"));
    }
}
