//! Core shared types for Prompt Lab records.

#![warn(missing_docs, clippy::pedantic)]

mod category;
mod discovery;
mod error;
mod id;
mod record;

/// Closed set of prompt categories.
pub use category::Category;
/// Record file discovery.
pub use discovery::json_files;
/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Validated prompt identifier.
pub use id::PromptId;
/// Strongly typed prompt record and its builder.
pub use record::{PromptRecord, PromptRecordBuilder, placeholders};

/// Score metric used for rankings when none is requested.
pub const DEFAULT_METRIC: &str = "effectiveness";

/// Number of prompts returned by a ranking when no limit is requested.
pub const DEFAULT_TOP_LIMIT: usize = 10;
