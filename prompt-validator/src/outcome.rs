//! Validation outcome types returned by the validator.

use serde::{Deserialize, Serialize};

/// Tri-state classification of a validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Record conforms and raised no warnings.
    Valid,
    /// Record conforms but raised semantic warnings.
    ValidWithWarnings,
    /// Record failed structural validation or could not be read.
    Invalid,
}

/// Result of validating one record or file.
///
/// `error` is only set when `valid` is false; warnings only accompany valid
/// outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

impl ValidationOutcome {
    /// Returns a valid outcome with no warnings.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
            warnings: Vec::new(),
        }
    }

    /// Returns a valid outcome carrying the supplied warnings.
    #[must_use]
    pub fn with_warnings(warnings: Vec<String>) -> Self {
        Self {
            valid: true,
            error: None,
            warnings,
        }
    }

    /// Returns an invalid outcome with an explanatory reason.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(reason.into()),
            warnings: Vec::new(),
        }
    }

    /// Returns the outcome classification.
    #[must_use]
    pub fn kind(&self) -> OutcomeKind {
        match (self.valid, self.warnings.is_empty()) {
            (false, _) => OutcomeKind::Invalid,
            (true, true) => OutcomeKind::Valid,
            (true, false) => OutcomeKind::ValidWithWarnings,
        }
    }

    /// Returns true when the record passed structural validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the failure reason for invalid outcomes.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the semantic warnings, in the order the checks produced them.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
