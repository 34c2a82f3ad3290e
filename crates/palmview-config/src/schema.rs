//! Configuration schema types for Palmview.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults.

use serde::{Deserialize, Serialize};

// =============================================================================
// Window Config
// =============================================================================

/// Host window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Palmview".into(),
            width: 1100,
            height: 780,
        }
    }
}

// =============================================================================
// Device Config
// =============================================================================

/// Simulated device configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Display name shown in the device chrome.
    pub name: String,
    /// Viewport width of the simulated screen in CSS pixels.
    pub width: u32,
    /// Viewport height of the simulated screen in CSS pixels.
    pub height: u32,
    /// User agent sent with frame requests.
    pub user_agent: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: "Pixel 8".into(),
            width: 393,
            height: 852,
            user_agent: "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36"
                .into(),
        }
    }
}

// =============================================================================
// Clock Config
// =============================================================================

/// Status-bar clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// chrono format string. The default is the pt-BR hour:minute convention.
    pub format: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: "%H:%M".into(),
        }
    }
}

// =============================================================================
// Example Sites
// =============================================================================

/// A preset site button in the URL bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSite {
    pub label: String,
    pub url: String,
}

pub fn default_examples() -> Vec<ExampleSite> {
    vec![
        ExampleSite {
            label: "Google".into(),
            url: "https://google.com".into(),
        },
        ExampleSite {
            label: "Wikipedia".into(),
            url: "https://pt.wikipedia.org".into(),
        },
        ExampleSite {
            label: "GitHub".into(),
            url: "https://github.com".into(),
        },
    ]
}

// =============================================================================
// Keybind Config
// =============================================================================

/// Global shortcut configuration. Keys are matched against the normalized
/// key names forwarded by the shell (e.g. "F5", "F11").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub refresh: String,
    pub toggle_fullscreen: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            refresh: "F5".into(),
            toggle_fullscreen: "F11".into(),
        }
    }
}

// =============================================================================
// Logging Config
// =============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing env-filter directive.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "palmview=info".into(),
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

/// Root configuration object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PalmviewConfig {
    pub window: WindowConfig,
    pub device: DeviceConfig,
    pub clock: ClockConfig,
    pub examples: Vec<ExampleSite>,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

impl Default for PalmviewConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            device: DeviceConfig::default(),
            clock: ClockConfig::default(),
            examples: default_examples(),
            keybinds: KeybindConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = PalmviewConfig::default();
        assert_eq!(config.window.title, "Palmview");
        assert_eq!(config.device.width, 393);
        assert_eq!(config.device.height, 852);
        assert_eq!(config.clock.format, "%H:%M");
        assert_eq!(config.keybinds.refresh, "F5");
        assert_eq!(config.keybinds.toggle_fullscreen, "F11");
        assert_eq!(config.examples.len(), 3);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: PalmviewConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 1100);
        assert_eq!(config.examples, default_examples());
    }

    #[test]
    fn partial_toml_inherits_missing_fields() {
        let config: PalmviewConfig = toml::from_str(
            r#"
            [device]
            name = "iPhone 15"
            width = 390
            "#,
        )
        .unwrap();
        assert_eq!(config.device.name, "iPhone 15");
        assert_eq!(config.device.width, 390);
        // Not overridden: falls back to the default.
        assert_eq!(config.device.height, 852);
        assert_eq!(config.window.title, "Palmview");
    }

    #[test]
    fn examples_override_replaces_the_list() {
        let config: PalmviewConfig = toml::from_str(
            r#"
            [[examples]]
            label = "Local"
            url = "http://localhost:3000"
            "#,
        )
        .unwrap();
        assert_eq!(config.examples.len(), 1);
        assert_eq!(config.examples[0].label, "Local");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = PalmviewConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: PalmviewConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.window.title, config.window.title);
        assert_eq!(parsed.device.user_agent, config.device.user_agent);
        assert_eq!(parsed.examples, config.examples);
    }
}
