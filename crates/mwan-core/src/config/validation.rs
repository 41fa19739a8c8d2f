use crate::config::types::{MwanConfig, OutputFormat};
use crate::errors::ConfigError;

/// Validate a merged configuration.
pub fn validate_config(config: &MwanConfig) -> Result<(), ConfigError> {
    if let Some(format) = &config.display.format {
        format.parse::<OutputFormat>()?;
    }

    if config.refresh.interval_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "refresh.interval_secs must be at least 1".to_string(),
        });
    }

    if config
        .status
        .path
        .as_ref()
        .is_some_and(|path| path.as_os_str().is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "status.path must not be empty".to_string(),
        });
    }

    Ok(())
}
