//! Prompt categories.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Category a prompt belongs to. The set is closed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Teaching and explanation prompts.
    Education,
    /// Writing, storytelling, and ideation prompts.
    Creative,
    /// Planning and workflow prompts.
    Productivity,
    /// Programming prompts.
    Coding,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Education,
        Self::Creative,
        Self::Productivity,
        Self::Coding,
    ];

    /// Returns the lowercase wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Creative => "creative",
            Self::Productivity => "productivity",
            Self::Coding => "coding",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "invalid_category".parse::<Category>().expect_err("closed set");
        assert!(matches!(err, Error::InvalidCategory(name) if name == "invalid_category"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Productivity).unwrap();
        assert_eq!(json, "\"productivity\"");
    }
}
