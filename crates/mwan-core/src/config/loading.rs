//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.mini-mwan/config.toml` (global user preferences)
//! 3. **Project config** - `./.mini-mwan/config.toml` (local overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::{DisplayConfig, MwanConfig, RefreshConfig, StatusConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_DIR_NAME: &str = ".mini-mwan";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if the merged configuration fails validation. Missing files are not errors.
pub fn load_hierarchy() -> Result<MwanConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths.push(std::env::current_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));

    load_from_paths(&paths)
}

/// Load and merge the given files in order, later files taking precedence.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<MwanConfig, ConfigError> {
    let mut config = MwanConfig::default();

    for path in paths {
        if let Some(file_config) = load_config_file(path)? {
            debug!(event = "core.config.file_loaded", path = %path.display());
            config = merge_configs(config, file_config);
        }
    }

    validate_config(&config)?;
    Ok(config)
}

/// Load a single config file. `Ok(None)` when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<MwanConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields are replaced only when the override sets them.
/// Translation entries are merged key by key.
pub fn merge_configs(base: MwanConfig, override_config: MwanConfig) -> MwanConfig {
    MwanConfig {
        status: StatusConfig {
            path: override_config.status.path.or(base.status.path),
        },
        refresh: RefreshConfig {
            interval_secs: override_config
                .refresh
                .interval_secs
                .or(base.refresh.interval_secs),
        },
        display: DisplayConfig {
            format: override_config.display.format.or(base.display.format),
            color: override_config.display.color.or(base.display.color),
        },
        translations: {
            let mut merged = base.translations;
            merged.extend(override_config.translations);
            merged
        },
    }
}
