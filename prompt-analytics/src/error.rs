//! Error types for the analytics subsystem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while persisting analytics output.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report could not be written.
    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Source [`std::io::Error`].
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for analytics operations that touch the filesystem.
pub type ReportResult<T> = Result<T, ReportError>;
