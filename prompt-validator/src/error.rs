//! Error types for schema loading and file-level validation.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading or compiling a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("failed to read schema {}: {source}", path.display())]
    Io {
        /// Path of the schema file.
        path: PathBuf,
        /// Source [`std::io::Error`].
        #[source]
        source: io::Error,
    },
    /// The schema file is not valid JSON.
    #[error("schema is not valid JSON: {source}")]
    Json {
        /// Source [`serde_json::Error`].
        #[from]
        source: serde_json::Error,
    },
    /// The document is JSON but not a usable JSON Schema.
    #[error("failed to compile schema: {reason}")]
    Compile {
        /// Reason reported by the schema compiler.
        reason: String,
    },
}

/// Result alias for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// File-level failures that prevent a record from being validated at all.
///
/// The display strings are the reasons surfaced in a
/// [`crate::ValidationOutcome`].
#[derive(Debug, Error)]
pub enum FileError {
    /// The file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The file exists but is not valid JSON.
    #[error("Invalid JSON: {source}")]
    Parse {
        /// Underlying parser error.
        #[from]
        source: serde_json::Error,
    },
    /// Any other I/O failure.
    #[error("Unexpected error: {source}")]
    Unexpected {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Classifies an I/O error raised while reading `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Unexpected { source }
        }
    }
}
