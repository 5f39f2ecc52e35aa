//! Repository-level statistics restricted to records that passed validation.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Serialize;

use crate::corpus::PromptCorpus;

/// Summary shown by the `stats` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryStats {
    /// Number of files that were validated.
    pub total: usize,
    /// Number of files that passed validation.
    pub valid: usize,
    /// Valid records per category.
    pub by_category: BTreeMap<String, usize>,
    /// Distinct models tested across valid records, sorted.
    pub models: Vec<String>,
    /// Number of distinct tags across valid records.
    pub unique_tags: usize,
}

impl RepositoryStats {
    /// Builds the summary from per-file validation verdicts and the loaded
    /// corpus. Only corpus entries whose path was judged valid contribute to
    /// the category, model, and tag figures.
    #[must_use]
    pub fn collect<'a, I>(verdicts: I, corpus: &PromptCorpus) -> Self
    where
        I: IntoIterator<Item = (&'a Path, bool)>,
    {
        let mut total = 0;
        let mut valid_paths = BTreeSet::new();
        for (path, valid) in verdicts {
            total += 1;
            if valid {
                valid_paths.insert(path);
            }
        }

        let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
        let mut models = BTreeSet::new();
        let mut tags = BTreeSet::new();
        for entry in corpus
            .entries()
            .iter()
            .filter(|entry| valid_paths.contains(entry.path()))
        {
            *by_category
                .entry(entry.category_or_unknown().to_owned())
                .or_default() += 1;
            models.extend(entry.models_tested());
            tags.extend(entry.tags());
        }

        Self {
            total,
            valid: valid_paths.len(),
            by_category,
            models: models.into_iter().map(str::to_owned).collect(),
            unique_tags: tags.len(),
        }
    }
}
