//! Full configuration validation.
//!
//! Validates window and device dimensions, keybind uniqueness, and that
//! every example preset carries a loadable URL.

use palmview_common::{urls, ConfigError};

use crate::keybinds;
use crate::schema::PalmviewConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PalmviewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.window.title.trim().is_empty() {
        errors.push("window.title: must not be empty".into());
    }
    validate_positive(&mut errors, "window.width", config.window.width);
    validate_positive(&mut errors, "window.height", config.window.height);

    validate_positive(&mut errors, "device.width", config.device.width);
    validate_positive(&mut errors, "device.height", config.device.height);

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    // An invalid strftime string would otherwise panic at render time
    if chrono::format::StrftimeItems::new(&config.clock.format)
        .any(|item| matches!(item, chrono::format::Item::Error))
    {
        errors.push(format!(
            "clock.format: '{}' is not a valid time format",
            config.clock.format
        ));
    }

    for (i, example) in config.examples.iter().enumerate() {
        if example.label.trim().is_empty() {
            errors.push(format!("examples[{i}].label: must not be empty"));
        }
        let valid = urls::normalize(&example.url)
            .map(|normalized| urls::is_valid(&normalized))
            .unwrap_or(false);
        if !valid {
            errors.push(format!(
                "examples[{i}].url: '{}' is not a loadable URL",
                example.url
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_positive(errors: &mut Vec<String>, field: &str, value: u32) {
    if value == 0 {
        errors.push(format!("{field}: must be positive"));
    }
}
