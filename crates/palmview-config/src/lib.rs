//! Palmview configuration system.
//!
//! TOML-based configuration with per-section serde defaults so partial
//! configs work out of the box. Loading from the default path creates a
//! commented template on first run; validation failures fall back to
//! defaults with a warning rather than aborting startup.

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ExampleSite, PalmviewConfig};

use palmview_common::ConfigError;

/// Convenience function to load config from the platform default path.
pub fn load_config() -> Result<PalmviewConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
