//! Lifecycle events shared by the CLI commands.

use crate::status::Status;
use std::path::Path;
use tracing::{error, info};

pub fn log_command_started(command: &str) {
    info!(
        event = "core.app.command_started",
        command = command,
        version = env!("CARGO_PKG_VERSION")
    );
}

/// The snapshot at `path` was read for the first render. `None` means the
/// file was missing or empty and the dashboard shows the no-status panel.
pub fn log_snapshot_loaded(path: &Path, status: Option<&Status>) {
    match status {
        Some(status) => info!(
            event = "core.dashboard.snapshot_loaded",
            path = %path.display(),
            mode = %status.mode,
            failover = status.is_failover(),
            interfaces = status.interfaces.len()
        ),
        None => info!(
            event = "core.dashboard.snapshot_missing",
            path = %path.display()
        ),
    }
}

pub fn log_command_failed(command: &str, error: &dyn std::error::Error) {
    error!(
        event = "core.app.command_failed",
        command = command,
        error = %error
    );
}
