//! In-memory corpus fixtures for unit tests.

use serde_json::Value;

use crate::corpus::{CorpusEntry, PromptCorpus};

pub(crate) fn corpus(values: Vec<Value>) -> PromptCorpus {
    let entries = values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| match value {
            Value::Object(map) => CorpusEntry::new(format!("prompts/{idx}.json"), map),
            _ => panic!("fixture must be an object"),
        })
        .collect();
    PromptCorpus::from_entries("prompts", entries)
}
