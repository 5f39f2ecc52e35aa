//! Validation of Prompt Lab records.
//!
//! A [`PromptValidator`] owns an immutable [`PromptSchema`] for its whole
//! lifetime. Each record is first checked structurally against the schema and
//! then, if it conforms, run through semantic consistency checks that only
//! produce warnings.

#![warn(missing_docs, clippy::pedantic)]

pub mod error;
pub mod outcome;
pub mod schema;
pub mod validator;

pub use error::{FileError, SchemaError, SchemaResult};
pub use outcome::{OutcomeKind, ValidationOutcome};
pub use schema::PromptSchema;
pub use validator::PromptValidator;
