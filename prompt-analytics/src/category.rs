//! Per-category statistics.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::corpus::PromptCorpus;
use crate::round_to;

/// Aggregated statistics for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    /// Number of records in the category.
    pub count: usize,
    /// Mean of each score metric over records reporting it, rounded to 2
    /// decimal places. A metric with no numeric values reports 0.
    pub avg_scores: BTreeMap<String, f64>,
    /// Distinct models listed in `models_tested`, sorted.
    pub models_used: Vec<String>,
}

#[derive(Default)]
struct CategoryAccumulator<'a> {
    count: usize,
    scores: BTreeMap<&'a str, Vec<f64>>,
    models: BTreeSet<&'a str>,
}

impl PromptCorpus {
    /// Groups records by category and summarises each group.
    #[must_use]
    pub fn category_stats(&self) -> BTreeMap<String, CategoryStats> {
        let mut groups: BTreeMap<&str, CategoryAccumulator<'_>> = BTreeMap::new();

        for entry in self.entries() {
            let group = groups.entry(entry.category_or_unknown()).or_default();
            group.count += 1;

            if let Some(score) = entry.score() {
                for (metric, value) in score {
                    let values = group.scores.entry(metric.as_str()).or_default();
                    if let Some(value) = value.as_f64() {
                        values.push(value);
                    }
                }
            }

            group.models.extend(entry.models_tested());
        }

        groups
            .into_iter()
            .map(|(category, group)| {
                let avg_scores = group
                    .scores
                    .into_iter()
                    .map(|(metric, values)| (metric.to_owned(), mean_rounded(&values)))
                    .collect();
                let stats = CategoryStats {
                    count: group.count,
                    avg_scores,
                    models_used: group.models.into_iter().map(str::to_owned).collect(),
                };
                (category.to_owned(), stats)
            })
            .collect()
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean_rounded(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    round_to(values.iter().sum::<f64>() / values.len() as f64, 2)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::fixtures::corpus;

    #[test]
    fn averages_scores_per_category() {
        let corpus = corpus(vec![
            json!({"category": "coding", "score": {"clarity": 5, "accuracy": 4}, "models_tested": ["gpt-4"]}),
            json!({"category": "coding", "score": {"clarity": 4}, "models_tested": ["claude-3", "gpt-4"]}),
            json!({"category": "coding", "score": {"clarity": 4}}),
            json!({"category": "creative"}),
        ]);

        let stats = corpus.category_stats();
        let coding = &stats["coding"];
        assert_eq!(coding.count, 3);
        assert!((coding.avg_scores["clarity"] - 4.33).abs() < 1e-9);
        assert!((coding.avg_scores["accuracy"] - 4.0).abs() < 1e-9);
        assert_eq!(coding.models_used, ["claude-3", "gpt-4"]);

        let creative = &stats["creative"];
        assert_eq!(creative.count, 1);
        assert!(creative.avg_scores.is_empty());
        assert!(creative.models_used.is_empty());
    }

    #[test]
    fn mean_at_exact_half_rounds_to_even() {
        let corpus = corpus(
            [5, 5, 5, 5, 5, 4, 2, 2]
                .into_iter()
                .map(|clarity| json!({"category": "education", "score": {"clarity": clarity}}))
                .collect(),
        );

        let stats = corpus.category_stats();
        assert!((stats["education"].avg_scores["clarity"] - 4.12).abs() < 1e-9);
    }

    #[test]
    fn missing_category_groups_as_unknown() {
        let corpus = corpus(vec![json!({"id": "x-1"}), json!({"category": 3})]);
        let stats = corpus.category_stats();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats["unknown"].count, 2);
    }

    #[test]
    fn non_numeric_metric_reports_zero() {
        let corpus = corpus(vec![json!({"category": "education", "score": {"clarity": "n/a"}})]);
        let stats = corpus.category_stats();
        assert!(stats["education"].avg_scores["clarity"].abs() < f64::EPSILON);
    }
}
