//! Model test coverage across the corpus.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::corpus::PromptCorpus;
use crate::round_to;

/// Coverage figures for one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCoverage {
    /// Records listing the model in `models_tested`.
    pub total_prompts: usize,
    /// Distinct categories among those records.
    pub categories_covered: usize,
    /// `total_prompts` as a percentage of the corpus, rounded to 1 decimal place.
    pub coverage_percentage: f64,
}

/// Coverage of every model named in any record's `models_tested`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    /// Number of distinct models.
    pub total_models: usize,
    /// Per-model coverage, keyed by model identifier.
    pub models: BTreeMap<String, ModelCoverage>,
    /// Number of records in the corpus.
    pub total_prompts: usize,
}

impl PromptCorpus {
    /// Computes per-model coverage. An empty corpus reports 0%.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let mut prompts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut categories: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

        for entry in self.entries() {
            for model in entry.models_tested() {
                *prompts.entry(model).or_default() += 1;
                categories
                    .entry(model)
                    .or_default()
                    .insert(entry.category_or_unknown());
            }
        }

        let total = self.len();
        let models: BTreeMap<String, ModelCoverage> = prompts
            .into_iter()
            .map(|(model, count)| {
                let coverage = ModelCoverage {
                    total_prompts: count,
                    categories_covered: categories.get(model).map_or(0, BTreeSet::len),
                    coverage_percentage: percentage(count, total),
                };
                (model.to_owned(), coverage)
            })
            .collect();

        CoverageReport {
            total_models: models.len(),
            models,
            total_prompts: total,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(part as f64 / total as f64 * 100.0, 1)
}
