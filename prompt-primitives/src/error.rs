//! Shared error definitions for prompt primitives.

use thiserror::Error;

/// Result alias used throughout Prompt Lab.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing prompt primitive types.
#[derive(Debug, Error)]
pub enum Error {
    /// Prompt identifier failed validation.
    #[error("invalid prompt id `{id}`: {reason}")]
    InvalidPromptId {
        /// The offending identifier string.
        id: String,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Category name is not part of the closed category set.
    #[error("invalid category `{0}`")]
    InvalidCategory(String),

    /// Prompt record failed validation while being built.
    #[error("invalid prompt record: {reason}")]
    InvalidRecord {
        /// Human-readable reason for rejection.
        reason: String,
    },
}
