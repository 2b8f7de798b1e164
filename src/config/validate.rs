//! Configuration validation.

use crate::config::Config;
use crate::constants::threshold;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_split(config)?;
    validate_classes(config)?;
    Ok(())
}

/// Validate split and dominance settings.
fn validate_split(config: &Config) -> Result<()> {
    let split = &config.split;

    // train_size must leave room for both subsets
    if !(split.train_size > 0.0 && split.train_size < 1.0) {
        return Err(Error::ConfigValidation {
            message: format!(
                "train_size must be between 0 and 1 (exclusive), got {}",
                split.train_size
            ),
        });
    }

    // Negated conjunction so NaN is rejected too
    if !(split.dominant_threshold > threshold::MIN_EXCLUSIVE
        && split.dominant_threshold <= threshold::MAX)
    {
        return Err(Error::InvalidThreshold {
            value: split.dominant_threshold,
        });
    }

    if split.formats.is_empty() {
        return Err(Error::ConfigValidation {
            message: "at least one output format must be configured".to_string(),
        });
    }

    Ok(())
}

/// Validate the class selection.
fn validate_classes(config: &Config) -> Result<()> {
    for class in &config.dataset.classes {
        if class.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "class names must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
