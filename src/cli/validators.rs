//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

/// Parse and validate the dominance threshold (0.0 exclusive to 1.0 inclusive).
pub fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(value > 0.0 && value <= 1.0) {
        return Err(format!(
            "threshold must be between 0 (exclusive) and 1 (inclusive), got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate the training fraction (0.0 to 1.0, both exclusive).
pub fn parse_train_size(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(value > 0.0 && value < 1.0) {
        return Err(format!(
            "train size must be between 0 and 1 (exclusive), got {value}"
        ));
    }

    Ok(value)
}
