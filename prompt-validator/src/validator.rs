//! Record, file, and directory validation.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use prompt_primitives::{PromptRecord, json_files};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{FileError, SchemaResult};
use crate::outcome::ValidationOutcome;
use crate::schema::PromptSchema;

/// Validates prompt records against a schema plus semantic consistency checks.
///
/// # Examples
///
/// ```
/// use prompt_validator::PromptValidator;
/// use serde_json::json;
///
/// let validator = PromptValidator::with_builtin_schema().unwrap();
/// let outcome = validator.validate(&json!({
///     "id": "edu-001",
///     "title": "Explain a concept",
///     "category": "education",
///     "prompt": "Explain {concept} simply",
///     "variables": ["concept"],
///     "responses": {}
/// }));
/// assert!(outcome.is_valid());
/// assert!(outcome.warnings().is_empty());
/// ```
#[derive(Debug)]
pub struct PromptValidator {
    schema: PromptSchema,
}

impl PromptValidator {
    /// Creates a validator that owns the supplied schema.
    #[must_use]
    pub fn new(schema: PromptSchema) -> Self {
        Self { schema }
    }

    /// Creates a validator using the schema bundled with this crate.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SchemaError`] from compiling the bundled schema.
    pub fn with_builtin_schema() -> SchemaResult<Self> {
        PromptSchema::builtin().map(Self::new)
    }

    /// Creates a validator from a schema file.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SchemaError`] from reading or compiling the file.
    pub fn from_schema_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        PromptSchema::load(path).map(Self::new)
    }

    /// Returns the schema this validator checks against.
    #[must_use]
    pub fn schema(&self) -> &PromptSchema {
        &self.schema
    }

    /// Validates a parsed record.
    ///
    /// Structural failures short-circuit: the first violation becomes the
    /// error and no warnings are computed.
    #[must_use]
    pub fn validate(&self, instance: &Value) -> ValidationOutcome {
        if let Some(violation) = self.schema.first_violation(instance) {
            return ValidationOutcome::invalid(violation);
        }

        match PromptRecord::deserialize(instance) {
            Ok(record) => ValidationOutcome::with_warnings(semantic_warnings(&record)),
            Err(err) => ValidationOutcome::invalid(err.to_string()),
        }
    }

    /// Validates an already typed record, e.g. one assembled by the creation
    /// wizard before it is written to disk.
    #[must_use]
    pub fn validate_record(&self, record: &PromptRecord) -> ValidationOutcome {
        match serde_json::to_value(record) {
            Ok(instance) => self.validate(&instance),
            Err(err) => ValidationOutcome::invalid(format!("Unexpected error: {err}")),
        }
    }

    /// Reads and validates the record stored at `path`.
    #[must_use]
    pub fn validate_file(&self, path: impl AsRef<Path>) -> ValidationOutcome {
        let path = path.as_ref();
        match read_document(path) {
            Ok(instance) => self.validate(&instance),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "record could not be read");
                ValidationOutcome::invalid(err.to_string())
            }
        }
    }

    /// Validates every `*.json` file below `dir`, keyed by file path.
    ///
    /// A missing directory yields an empty map. Per-file failures are
    /// collected rather than propagated.
    #[must_use]
    pub fn validate_directory(&self, dir: impl AsRef<Path>) -> BTreeMap<PathBuf, ValidationOutcome> {
        let dir = dir.as_ref();
        let results: BTreeMap<_, _> = json_files(dir)
            .into_iter()
            .map(|path| {
                let outcome = self.validate_file(&path);
                (path, outcome)
            })
            .collect();

        info!(
            dir = %dir.display(),
            files = results.len(),
            failed = results.values().filter(|o| !o.is_valid()).count(),
            "validated prompt directory"
        );
        results
    }
}

/// Parses the JSON document at `path`, classifying failures.
///
/// # Errors
///
/// Returns [`FileError`] when the file is missing, unreadable, or not JSON.
pub fn read_document(path: &Path) -> Result<Value, FileError> {
    let text = fs::read_to_string(path).map_err(|err| FileError::from_io(path, err))?;
    Ok(serde_json::from_str(&text)?)
}

fn semantic_warnings(record: &PromptRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    let score_empty = record.score().is_some_and(|score| {
        score
            .values()
            .all(|value| value.is_none_or(|v| v.abs() < f64::EPSILON))
    });
    if score_empty {
        warnings.push("Score object exists but all values are empty".to_owned());
    }

    if let (Some(tested), Some(responses)) = (record.models_tested(), record.responses()) {
        let tested: BTreeSet<&str> = tested.iter().map(String::as_str).collect();
        let answered: BTreeSet<&str> = responses.keys().map(String::as_str).collect();
        if tested != answered {
            warnings.push(format!(
                "Mismatch between models_tested and response keys: tested={}, responses={}",
                render_set(&tested),
                render_set(&answered)
            ));
        }
    }

    warnings.extend(
        record
            .missing_variables()
            .map(|name| format!("Variable '{name}' not found in prompt text")),
    );

    warnings
}

fn render_set(items: &BTreeSet<&str>) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("{{{}}}", quoted.join(", "))
}
