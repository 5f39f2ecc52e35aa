//! Loading prompt documents into an in-memory corpus.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use prompt_primitives::json_files;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Category reported for records without a usable `category` field.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// One loaded prompt document.
///
/// Accessors are lenient: a field that is absent or has the wrong JSON type
/// reads as missing instead of failing.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    path: PathBuf,
    document: Map<String, Value>,
}

impl CorpusEntry {
    /// Wraps a parsed JSON object loaded from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, document: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// Returns the file the entry was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the raw JSON object.
    #[must_use]
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Returns the prompt id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    /// Returns the category, if it is a string.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.str_field("category")
    }

    /// Returns the category or [`UNKNOWN_CATEGORY`].
    #[must_use]
    pub fn category_or_unknown(&self) -> &str {
        self.category().unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Returns the distinct string entries of `models_tested`.
    #[must_use]
    pub fn models_tested(&self) -> BTreeSet<&str> {
        self.string_items("models_tested")
    }

    /// Returns the distinct string entries of `tags`.
    #[must_use]
    pub fn tags(&self) -> BTreeSet<&str> {
        self.string_items("tags")
    }

    /// Returns the model keys of the `responses` object.
    #[must_use]
    pub fn response_models(&self) -> BTreeSet<&str> {
        self.document
            .get("responses")
            .and_then(Value::as_object)
            .map(|responses| responses.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns true when `model` is listed in `models_tested` or has a response.
    #[must_use]
    pub fn tested_with(&self, model: &str) -> bool {
        self.models_tested().contains(model) || self.response_models().contains(model)
    }

    /// Returns the `score` object.
    #[must_use]
    pub fn score(&self) -> Option<&Map<String, Value>> {
        self.document.get("score").and_then(Value::as_object)
    }

    /// Returns the numeric value of a score metric.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.score()?.get(name)?.as_f64()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.document.get(key).and_then(Value::as_str)
    }

    fn string_items(&self, key: &str) -> BTreeSet<&str> {
        self.document
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Immutable snapshot of every loadable prompt document below a directory.
#[derive(Debug, Clone, Default)]
pub struct PromptCorpus {
    root: PathBuf,
    entries: Vec<CorpusEntry>,
}

impl PromptCorpus {
    /// Loads every `*.json` file below `root`, in sorted path order.
    ///
    /// Files that cannot be read, are not JSON, or are not JSON objects are
    /// skipped. A missing directory yields an empty corpus.
    #[must_use]
    pub fn load(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for path in json_files(&root) {
            match load_entry(&path) {
                Some(entry) => entries.push(entry),
                None => skipped += 1,
            }
        }

        info!(
            root = %root.display(),
            loaded = entries.len(),
            skipped,
            "loaded prompt corpus"
        );
        Self { root, entries }
    }

    /// Builds a corpus from already loaded entries.
    #[must_use]
    pub fn from_entries(root: impl Into<PathBuf>, entries: Vec<CorpusEntry>) -> Self {
        Self {
            root: root.into(),
            entries,
        }
    }

    /// Returns the directory the corpus was loaded from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the loaded entries.
    #[must_use]
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Returns the number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn load_entry(path: &Path) -> Option<CorpusEntry> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable prompt file");
            return None;
        }
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(document)) => Some(CorpusEntry::new(path, document)),
        Ok(_) => {
            debug!(path = %path.display(), "skipping prompt file without a top-level object");
            None
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping malformed prompt file");
            None
        }
    }
}
