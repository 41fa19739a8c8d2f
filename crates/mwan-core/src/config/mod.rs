//! # Configuration System
//!
//! Hierarchical TOML configuration for the mini-mwan dashboard.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.mini-mwan/config.toml`
//! 3. **Project config** - `./.mini-mwan/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use mwan_core::config::MwanConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MwanConfig::load_hierarchy()?;
//!     println!("reading {}", config.status_path().display());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{DisplayConfig, MwanConfig, OutputFormat, RefreshConfig, StatusConfig};
pub use validation::validate_config;

impl MwanConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Translator built from the `[translations]` section.
    pub fn translator(&self) -> crate::i18n::Catalog {
        crate::i18n::Catalog::new(self.translations.clone())
    }
}
