//! Configuration validation.
//!
//! Runs before any file is read so a bad config fails fast with the
//! offending `[section] key`.

use crate::domain::error::PnlError;
use crate::ports::config_port::ConfigPort;

pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), PnlError> {
    validate_capital_base(config)?;
    validate_dates(config)?;
    Ok(())
}

pub fn validate_clean_config(config: &dyn ConfigPort) -> Result<(), PnlError> {
    validate_non_negative(config, "clean", "skip_rows")?;
    validate_non_negative(config, "clean", "date_column")?;
    Ok(())
}

fn validate_capital_base(config: &dyn ConfigPort) -> Result<(), PnlError> {
    if config.get_string("analysis", "capital_base").is_none() {
        return Ok(());
    }
    let value = config.get_double("analysis", "capital_base", f64::NAN);
    if !value.is_finite() || value <= 0.0 {
        return Err(PnlError::ConfigInvalid {
            section: "analysis".to_string(),
            key: "capital_base".to_string(),
            reason: "capital_base must be a positive number".to_string(),
        });
    }
    Ok(())
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), PnlError> {
    // An inverted window is allowed; it just selects nothing.
    config.get_date("analysis", "start_date")?;
    config.get_date("analysis", "end_date")?;
    Ok(())
}

fn validate_non_negative(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), PnlError> {
    let raw = match config.get_string(section, key) {
        Some(raw) => raw,
        None => return Ok(()),
    };
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 0 => Ok(()),
        _ => Err(PnlError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: format!("{} must be a non-negative integer", key),
        }),
    }
}
