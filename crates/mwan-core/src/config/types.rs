//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [status]
//! path = "/var/run/mini-mwan.status"
//!
//! [refresh]
//! interval_secs = 5
//!
//! [display]
//! format = "text"
//! color = true
//!
//! [translations]
//! "Mini-MWAN Status" = "Estado de Mini-MWAN"
//! ```

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.mini-mwan/config.toml`
/// 2. Project config: `./.mini-mwan/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MwanConfig {
    /// Status snapshot location
    #[serde(default)]
    pub status: StatusConfig,

    /// Watch mode settings
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Output settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Message translations, keyed by the English message
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatusConfig {
    /// Path of the snapshot file.
    /// Default: /var/run/mini-mwan.status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefreshConfig {
    /// Seconds between refreshes in watch mode.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// One of: text, html, json.
    /// Default: text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Whether text output uses ANSI colors.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// How the dashboard is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub const VALUES: [&'static str; 3] = ["text", "html", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidFormat {
                format: other.to_string(),
            }),
        }
    }
}
