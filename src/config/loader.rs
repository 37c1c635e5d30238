//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{PlotcycleError, Result};
use crate::fs;
use crate::schemas::LifecycleConfig;

/// Load configuration, falling back to defaults.
///
/// With no path, or a path that does not exist, the default configuration
/// is returned. A file that exists is read, merged with defaults for any
/// missing field, and validated.
///
/// # Arguments
/// * `path` - Optional path to a JSON configuration file
///
/// # Errors
/// * `InvalidJson` - If the file is not valid JSON for the schema
/// * `ConfigError` - If the thresholds are inconsistent
pub fn load_config(path: Option<&Path>) -> Result<LifecycleConfig> {
    let config = match path {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading configuration");
            fs::read_json(path)?
        }
        Some(path) => {
            tracing::debug!(path = %path.display(), "configuration file missing, using defaults");
            LifecycleConfig::default()
        }
        None => LifecycleConfig::default(),
    };

    validate_config(&config)?;
    Ok(config)
}

/// Check that the thresholds describe a consistent crop calendar.
pub fn validate_config(config: &LifecycleConfig) -> Result<()> {
    let growth = &config.growth;
    let phases = [
        ("early_growing_after_days", growth.early_growing_after_days),
        ("growing_after_days", growth.growing_after_days),
        ("flowering_after_days", growth.flowering_after_days),
        ("fruiting_after_days", growth.fruiting_after_days),
        ("ready_after_days", growth.ready_after_days),
    ];
    ensure_increasing("growth", &phases)?;

    let recovery = &config.recovery;
    let bands = [
        ("sown_until_days", recovery.sown_until_days),
        ("growing_until_days", recovery.growing_until_days),
        ("flowering_until_days", recovery.flowering_until_days),
        ("fruiting_until_days", recovery.fruiting_until_days),
    ];
    ensure_increasing("recovery", &bands)?;

    if recovery.min_treatments == 0 {
        return Err(PlotcycleError::ConfigError(
            "recovery.min_treatments must be at least 1".to_string(),
        ));
    }

    if config.preparation.min_maintenance == 0 {
        return Err(PlotcycleError::ConfigError(
            "preparation.min_maintenance must be at least 1".to_string(),
        ));
    }

    if config.rest_days < 0 || config.harvest_overdue_days < 0 {
        return Err(PlotcycleError::ConfigError(
            "rest_days and harvest_overdue_days must not be negative".to_string(),
        ));
    }

    Ok(())
}

fn ensure_increasing(section: &str, values: &[(&str, i64)]) -> Result<()> {
    if let Some((name, value)) = values.iter().find(|(_, value)| *value < 0) {
        return Err(PlotcycleError::ConfigError(format!(
            "{}.{} must not be negative, got {}",
            section, name, value
        )));
    }

    for pair in values.windows(2) {
        let (prev_name, prev) = pair[0];
        let (name, value) = pair[1];
        if value <= prev {
            return Err(PlotcycleError::ConfigError(format!(
                "{}.{} ({}) must be greater than {}.{} ({})",
                section, name, value, section, prev_name, prev
            )));
        }
    }
    Ok(())
}
