//! Strongly typed prompt record stored as one JSON document per prompt.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::{Category, PromptId};

/// A single prompt record.
///
/// Optional fields stay `None` when absent from the source document so that
/// "missing" and "present but empty" remain distinguishable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    id: PromptId,
    title: String,
    category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goal: Option<String>,
    prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variables: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    models_tested: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responses: Option<BTreeMap<String, String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_score"
    )]
    score: Option<BTreeMap<String, Option<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
}

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Writes whole-number scores as JSON integers so that records round-trip
/// through integer-typed schemas.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp, clippy::ref_option)]
fn serialize_score<S>(
    score: &Option<BTreeMap<String, Option<f64>>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let Some(score) = score else {
        return serializer.serialize_none();
    };

    let mut map = serializer.serialize_map(Some(score.len()))?;
    for (metric, value) in score {
        match value {
            Some(v) if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT => {
                map.serialize_entry(metric, &(*v as i64))?;
            }
            other => map.serialize_entry(metric, other)?,
        }
    }
    map.end()
}

impl PromptRecord {
    /// Starts building a [`PromptRecord`].
    #[must_use]
    pub fn builder(id: PromptId, category: Category) -> PromptRecordBuilder {
        PromptRecordBuilder {
            id,
            category,
            title: None,
            goal: None,
            prompt: None,
            variables: None,
            tags: None,
            models_tested: None,
            responses: None,
            score: None,
            last_updated: None,
        }
    }

    /// Returns the prompt identifier.
    #[must_use]
    pub fn id(&self) -> &PromptId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the optional goal statement.
    #[must_use]
    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    /// Returns the raw prompt template text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the declared placeholder names, in declaration order.
    #[must_use]
    pub fn variables(&self) -> Option<&[String]> {
        self.variables.as_deref()
    }

    /// Returns the tag labels.
    #[must_use]
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Returns the models this prompt was tested against.
    #[must_use]
    pub fn models_tested(&self) -> Option<&[String]> {
        self.models_tested.as_deref()
    }

    /// Returns recorded responses keyed by model identifier.
    #[must_use]
    pub fn responses(&self) -> Option<&BTreeMap<String, String>> {
        self.responses.as_ref()
    }

    /// Returns metric scores keyed by metric name.
    #[must_use]
    pub fn score(&self) -> Option<&BTreeMap<String, Option<f64>>> {
        self.score.as_ref()
    }

    /// Returns the last update date string.
    #[must_use]
    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    /// Returns declared variables whose `{name}` placeholder does not occur in
    /// the prompt text, in declaration order.
    pub fn missing_variables(&self) -> impl Iterator<Item = &str> {
        self.variables
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|name| !self.prompt.contains(&format!("{{{name}}}")))
    }

    /// Returns the suggested file name for this record, e.g.
    /// `edu_001_explain_like_a_tutor.json`.
    #[must_use]
    pub fn file_name(&self) -> String {
        let slug: String = self
            .title
            .to_lowercase()
            .replace(' ', "_")
            .chars()
            .take(30)
            .collect();
        format!("{}_{slug}.json", self.id.file_stem())
    }
}

/// Extracts single-brace `{name}` placeholder names from prompt text, in order
/// of first appearance.
#[must_use]
pub fn placeholders(text: &str) -> Vec<String> {
    let mut vars: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_var = false;

    for ch in text.chars() {
        match ch {
            '{' => {
                in_var = true;
                current.clear();
            }
            '}' if in_var => {
                in_var = false;
                let name = current.trim();
                if !name.is_empty() && !vars.iter().any(|v| v == name) {
                    vars.push(name.to_owned());
                }
            }
            _ if in_var => current.push(ch),
            _ => {}
        }
    }

    vars
}

/// Builder for [`PromptRecord`].
#[derive(Debug)]
pub struct PromptRecordBuilder {
    id: PromptId,
    category: Category,
    title: Option<String>,
    goal: Option<String>,
    prompt: Option<String>,
    variables: Option<Vec<String>>,
    tags: Option<Vec<String>>,
    models_tested: Option<Vec<String>>,
    responses: Option<BTreeMap<String, String>>,
    score: Option<BTreeMap<String, Option<f64>>>,
    last_updated: Option<String>,
}

impl PromptRecordBuilder {
    /// Sets the display title.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRecord`] when the title is empty.
    pub fn title(mut self, title: impl Into<String>) -> crate::Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(crate::Error::InvalidRecord {
                reason: "title cannot be empty".into(),
            });
        }
        self.title = Some(title);
        Ok(self)
    }

    /// Sets the prompt template text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRecord`] when the prompt text is empty.
    pub fn prompt(mut self, prompt: impl Into<String>) -> crate::Result<Self> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(crate::Error::InvalidRecord {
                reason: "prompt text cannot be empty".into(),
            });
        }
        self.prompt = Some(prompt);
        Ok(self)
    }

    /// Sets the goal statement.
    #[must_use]
    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    /// Replaces the declared variables.
    #[must_use]
    pub fn variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = Some(variables.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the tag labels.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the tested model list.
    #[must_use]
    pub fn models_tested<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models_tested = Some(models.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a response for the given model.
    #[must_use]
    pub fn response(mut self, model: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses
            .get_or_insert_with(BTreeMap::new)
            .insert(model.into(), text.into());
        self
    }

    /// Marks the responses mapping as present even when empty.
    #[must_use]
    pub fn empty_responses(mut self) -> Self {
        self.responses.get_or_insert_with(BTreeMap::new);
        self
    }

    /// Records a score for the given metric.
    #[must_use]
    pub fn score(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.score
            .get_or_insert_with(BTreeMap::new)
            .insert(metric.into(), Some(value));
        self
    }

    /// Sets the last update date string.
    #[must_use]
    pub fn last_updated(mut self, date: impl Into<String>) -> Self {
        self.last_updated = Some(date.into());
        self
    }

    /// Consumes the builder and returns the record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRecord`] if the title or prompt text was
    /// never provided.
    pub fn build(self) -> crate::Result<PromptRecord> {
        let title = self.title.ok_or_else(|| crate::Error::InvalidRecord {
            reason: "title must be provided".into(),
        })?;
        let prompt = self.prompt.ok_or_else(|| crate::Error::InvalidRecord {
            reason: "prompt text must be provided".into(),
        })?;

        Ok(PromptRecord {
            id: self.id,
            title,
            category: self.category,
            goal: self.goal,
            prompt,
            variables: self.variables,
            tags: self.tags,
            models_tested: self.models_tested,
            responses: self.responses,
            score: self.score,
            last_updated: self.last_updated,
        })
    }
}
