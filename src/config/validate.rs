//! Configuration validation.

use crate::config::{Config, FilterConfig};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_filter(&config.filter)
}

/// Validate filter settings.
fn validate_filter(filter: &FilterConfig) -> Result<()> {
    if filter.marker.is_empty() {
        return Err(Error::ConfigValidation {
            message: "marker must not be empty".to_string(),
        });
    }

    if filter.tier_name.is_empty() {
        return Err(Error::ConfigValidation {
            message: "tier_name must not be empty".to_string(),
        });
    }

    validate_extension("annotation_extension", &filter.annotation_extension)?;
    validate_extension("audio_extension", &filter.audio_extension)?;

    // Deleting an example must never delete the annotation twice
    if filter.annotation_extension == filter.audio_extension {
        return Err(Error::ConfigValidation {
            message: format!(
                "annotation_extension and audio_extension must differ, both are '{}'",
                filter.audio_extension
            ),
        });
    }

    Ok(())
}

fn validate_extension(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::ConfigValidation {
            message: format!("{name} must not be empty"),
        });
    }

    if value.contains(['.', '/', '\\']) {
        return Err(Error::ConfigValidation {
            message: format!("{name} must be a bare extension without dots or separators, got '{value}'"),
        });
    }

    Ok(())
}
