//! Default values and resolved accessors for configuration types.

use crate::config::types::{MwanConfig, OutputFormat};
use crate::render::DEFAULT_REFRESH_INTERVAL_SECS;
use crate::source::DEFAULT_STATUS_PATH;
use std::path::PathBuf;

impl MwanConfig {
    /// Snapshot path, falling back to the daemon's default location.
    pub fn status_path(&self) -> PathBuf {
        self.status
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATUS_PATH))
    }

    pub fn refresh_interval_secs(&self) -> u64 {
        self.refresh
            .interval_secs
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
    }

    /// Output format. Invalid values are rejected at load time, so an
    /// unparseable value here falls back to text.
    pub fn output_format(&self) -> OutputFormat {
        self.display
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    pub fn color(&self) -> bool {
        self.display.color.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MwanConfig::default();
        assert_eq!(config.status_path(), PathBuf::from("/var/run/mini-mwan.status"));
        assert_eq!(config.refresh_interval_secs(), 5);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.color());
    }
}
