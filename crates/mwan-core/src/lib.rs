//! mwan-core: status snapshot parsing and dashboard rendering for mini-mwan
//!
//! The mini-mwan daemon periodically rewrites a small sectioned key=value
//! snapshot of its WAN interfaces. This library turns that snapshot into a
//! display tree and keeps a mounted tree fresh. It is used by the `mwan` CLI.
//!
//! # Main Entry Points
//!
//! - [`status`] - Parse snapshot text into a [`Status`] record
//! - [`render`] - Build the dashboard tree from snapshot text
//! - [`refresh`] - Periodically re-read, re-render and replace
//! - [`view`] - Serialize a tree as terminal text or HTML
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod refresh;
pub mod render;
pub mod source;
pub mod status;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use config::{MwanConfig, OutputFormat};
pub use errors::{ConfigError, MwanError, MwanResult};
pub use i18n::{Catalog, Identity, Translator};
pub use refresh::{MemorySurface, RefreshHandle, RefreshLoop, Surface, TickOutcome};
pub use render::{RenderContext, Renderer, Zone};
pub use source::{FileSource, SourceError, StatusSource};
pub use status::{Interface, InterfaceStatus, Status};
pub use view::{Node, TextOptions};

// Re-export logging initialization
pub use logging::init_logging;
