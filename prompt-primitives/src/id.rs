//! Prompt identifier types.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Unique identifier of a prompt record, e.g. `edu-001`.
///
/// Identifiers contain lowercase ASCII letters, digits, and hyphens only.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromptId(String);

impl PromptId {
    /// Creates a new prompt identifier after validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPromptId`] if the supplied identifier is empty or
    /// contains characters outside `[a-z0-9-]`.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_identifier(&id)?;
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier in the form used for file names (`edu-001` -> `edu_001`).
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl Display for PromptId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PromptId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PromptId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PromptId> for String {
    fn from(value: PromptId) -> Self {
        value.0
    }
}

fn validate_identifier(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidPromptId {
            id: String::new(),
            reason: "identifier cannot be empty".into(),
        });
    }

    if !id
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
    {
        return Err(Error::InvalidPromptId {
            id: id.into(),
            reason: "identifier must contain lowercase alphanumeric or dash only".into(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_dashed_ids() {
        let id = PromptId::new("edu-001").expect("valid id");
        assert_eq!(id.as_str(), "edu-001");
        assert_eq!(id.file_stem(), "edu_001");
    }

    #[test]
    fn rejects_uppercase_and_underscore() {
        let err = PromptId::new("TEST_001").expect_err("pattern violation");
        assert!(matches!(err, Error::InvalidPromptId { .. }));
        assert!(PromptId::new("").is_err());
        assert!(PromptId::new("edu 001").is_err());
    }

    #[test]
    fn deserializes_through_validation() {
        let ok: PromptId = serde_json::from_str("\"code-7\"").unwrap();
        assert_eq!(ok.to_string(), "code-7");
        assert!(serde_json::from_str::<PromptId>("\"Code_7\"").is_err());
    }
}
