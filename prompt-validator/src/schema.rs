//! Prompt schema loading and structural checks.

use std::fmt;
use std::fs;
use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;
use tracing::debug;

use crate::error::{SchemaError, SchemaResult};

/// Schema shipped with the crate.
const BUILTIN_SCHEMA: &str = include_str!("../schema/prompt_schema.json");

/// Compiled draft-07 schema describing a prompt record.
///
/// The schema is read and compiled once; it never reloads implicitly.
pub struct PromptSchema {
    document: Value,
    compiled: Validator,
}

impl PromptSchema {
    /// Compiles the schema bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the bundled document fails to parse or
    /// compile.
    pub fn builtin() -> SchemaResult<Self> {
        Self::from_value(serde_json::from_str(BUILTIN_SCHEMA)?)
    }

    /// Reads and compiles the schema file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Io`] when the file cannot be read, and the
    /// parse/compile variants when its content is not a usable schema.
    pub fn load(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded prompt schema");
        Self::from_value(serde_json::from_str(&text)?)
    }

    /// Compiles an in-memory schema document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] when the document is not a valid schema.
    pub fn from_value(document: Value) -> SchemaResult<Self> {
        let compiled = jsonschema::validator_for(&document).map_err(|err| {
            SchemaError::Compile {
                reason: err.to_string(),
            }
        })?;
        Ok(Self { document, compiled })
    }

    /// Returns the raw schema document.
    #[must_use]
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Returns the top-level required field names.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&str> {
        self.document
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns the allowed values of the `category` enum, if the schema declares one.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.document
            .pointer("/properties/category/enum")
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns a description of the first structural violation in `instance`,
    /// or `None` when it conforms.
    #[must_use]
    pub fn first_violation(&self, instance: &Value) -> Option<String> {
        self.compiled
            .iter_errors(instance)
            .next()
            .map(|err| err.to_string())
    }
}

impl fmt::Debug for PromptSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptSchema")
            .field("title", &self.document.get("title"))
            .field("required", &self.required_fields())
            .finish_non_exhaustive()
    }
}
