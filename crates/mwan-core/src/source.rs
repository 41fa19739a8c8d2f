//! Where status snapshots come from.

use crate::errors::MwanError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Path the mini-mwan daemon writes its snapshot to.
pub const DEFAULT_STATUS_PATH: &str = "/var/run/mini-mwan.status";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Status file not found at '{path}'")]
    NotFound { path: String },

    #[error("Failed to read status file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MwanError for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            SourceError::NotFound { .. } => "STATUS_NOT_FOUND",
            SourceError::ReadFailed { .. } => "STATUS_READ_FAILED",
        }
    }
}

/// Reads one whole snapshot per call. Implementations keep no state between
/// reads: no locking, no watching.
pub trait StatusSource {
    fn read(&mut self) -> Result<String, SourceError>;
}

/// Snapshot file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_PATH)
    }
}

impl StatusSource for FileSource {
    fn read(&mut self) -> Result<String, SourceError> {
        let path = self.path.display().to_string();
        match fs::read(&self.path) {
            Ok(bytes) => {
                debug!(
                    event = "core.source.read_completed",
                    path = %path,
                    bytes = bytes.len()
                );
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound { path })
            }
            Err(e) => Err(SourceError::ReadFailed { path, source: e }),
        }
    }
}

/// First load: a failed read counts as "no data" so the first render shows
/// the empty-state panel instead of an error.
pub fn load_initial(source: &mut dyn StatusSource) -> String {
    match source.read() {
        Ok(text) => text,
        Err(e) => {
            warn!(
                event = "core.source.initial_load_failed",
                error = %e,
                error_code = e.error_code()
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_source_reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "mode=failover\n[wan]\nstatus=up\n").unwrap();

        let mut source = FileSource::new(file.path());
        assert_eq!(source.read().unwrap(), "mode=failover\n[wan]\nstatus=up\n");
        // Every read is a fresh snapshot
        assert_eq!(source.read().unwrap(), "mode=failover\n[wan]\nstatus=up\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut source = FileSource::new(dir.path().join("absent.status"));
        let err = source.read().unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
        assert_eq!(err.error_code(), "STATUS_NOT_FOUND");
    }

    #[test]
    fn test_directory_is_read_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut source = FileSource::new(dir.path());
        let err = source.read().unwrap_err();
        assert_eq!(err.error_code(), "STATUS_READ_FAILED");
    }

    #[test]
    fn test_load_initial_maps_failure_to_empty_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut source = FileSource::new(dir.path().join("absent.status"));
        assert_eq!(load_initial(&mut source), "");
    }

    #[test]
    fn test_default_path() {
        assert_eq!(
            FileSource::default().path(),
            Path::new("/var/run/mini-mwan.status")
        );
    }
}
