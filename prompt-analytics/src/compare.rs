//! Head-to-head model comparison.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::corpus::PromptCorpus;

/// Per-category tested counts for the two compared models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    /// Records in the category tested with the first model.
    pub first: usize,
    /// Records in the category tested with the second model.
    pub second: usize,
}

/// Overlap of two models across the corpus.
///
/// A record counts as tested with a model when the model is listed in
/// `models_tested` or appears as a key of `responses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelComparison {
    /// First model identifier.
    pub first_model: String,
    /// Second model identifier.
    pub second_model: String,
    /// Records tested with the first model.
    pub first_tested: usize,
    /// Records tested with the second model.
    pub second_tested: usize,
    /// Records tested with both models.
    pub both_tested: usize,
    /// Breakdown by category; only categories where either model appears.
    pub categories: BTreeMap<String, CategoryTally>,
}

impl PromptCorpus {
    /// Compares how many records were tested with each of two models.
    #[must_use]
    pub fn compare_models(&self, first: &str, second: &str) -> ModelComparison {
        let mut comparison = ModelComparison {
            first_model: first.to_owned(),
            second_model: second.to_owned(),
            first_tested: 0,
            second_tested: 0,
            both_tested: 0,
            categories: BTreeMap::new(),
        };

        for entry in self.entries() {
            let has_first = entry.tested_with(first);
            let has_second = entry.tested_with(second);
            if !has_first && !has_second {
                continue;
            }

            let tally = comparison
                .categories
                .entry(entry.category_or_unknown().to_owned())
                .or_default();
            if has_first {
                comparison.first_tested += 1;
                tally.first += 1;
            }
            if has_second {
                comparison.second_tested += 1;
                tally.second += 1;
            }
            if has_first && has_second {
                comparison.both_tested += 1;
            }
        }

        comparison
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fixtures::corpus;

    #[test]
    fn counts_either_signal_as_tested() {
        let corpus = corpus(vec![
            json!({"category": "coding", "models_tested": ["gpt-4", "claude-3"]}),
            json!({"category": "coding", "responses": {"gpt-4": "a"}}),
            json!({"category": "education", "models_tested": ["claude-3"], "responses": {"gpt-4": "b"}}),
            json!({"category": "creative", "models_tested": ["gemini"]}),
            json!({"models_tested": ["claude-3"]}),
        ]);

        let comparison = corpus.compare_models("gpt-4", "claude-3");
        assert_eq!(comparison.first_tested, 3);
        assert_eq!(comparison.second_tested, 3);
        assert_eq!(comparison.both_tested, 2);
        assert_eq!(
            comparison.categories["coding"],
            CategoryTally { first: 2, second: 1 }
        );
        assert_eq!(
            comparison.categories["education"],
            CategoryTally { first: 1, second: 1 }
        );
        assert_eq!(
            comparison.categories["unknown"],
            CategoryTally { first: 0, second: 1 }
        );
        assert!(!comparison.categories.contains_key("creative"));
    }

    #[test]
    fn empty_corpus_compares_to_zero() {
        let comparison = corpus(Vec::new()).compare_models("a", "b");
        assert_eq!(comparison.first_tested, 0);
        assert_eq!(comparison.both_tested, 0);
        assert!(comparison.categories.is_empty());
    }
}
