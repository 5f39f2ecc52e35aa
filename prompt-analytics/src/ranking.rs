//! Top-N ranking by score metric.

use serde::Serialize;

use crate::corpus::PromptCorpus;

/// A ranked prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPrompt {
    /// Prompt id, if the record has one.
    pub id: Option<String>,
    /// Prompt title, if the record has one.
    pub title: Option<String>,
    /// Prompt category, if the record has one.
    pub category: Option<String>,
    /// Value of the ranking metric.
    pub score: f64,
}

impl PromptCorpus {
    /// Returns up to `limit` records with a numeric `metric` score, highest
    /// first. Ties keep corpus order.
    #[must_use]
    pub fn top_prompts(&self, metric: &str, limit: usize) -> Vec<TopPrompt> {
        let mut scored: Vec<TopPrompt> = self
            .entries()
            .iter()
            .filter_map(|entry| {
                entry.metric(metric).map(|score| TopPrompt {
                    id: entry.id().map(str::to_owned),
                    title: entry.title().map(str::to_owned),
                    category: entry.category().map(str::to_owned),
                    score,
                })
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(limit);
        scored
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::fixtures::corpus;

    #[test]
    fn sorts_descending_with_stable_ties() {
        let corpus = corpus(vec![
            json!({"id": "a", "score": {"clarity": 3}}),
            json!({"id": "b", "score": {"clarity": 5}}),
            json!({"id": "c", "score": {"accuracy": 5}}),
            json!({"id": "d", "score": {"clarity": 3}}),
            json!({"id": "e", "score": {"clarity": 5}}),
            json!({"id": "f"}),
        ]);

        let ids: Vec<_> = corpus
            .top_prompts("clarity", 10)
            .into_iter()
            .map(|p| p.id.unwrap())
            .collect();
        assert_eq!(ids, ["b", "e", "a", "d"]);
    }

    #[test]
    fn limit_truncates() {
        let corpus = corpus(vec![
            json!({"id": "a", "title": "A", "category": "coding", "score": {"effectiveness": 2}}),
            json!({"id": "b", "title": "B", "category": "creative", "score": {"effectiveness": 4}}),
        ]);

        let top = corpus.top_prompts("effectiveness", 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id.as_deref(), Some("b"));
        assert_eq!(top[0].title.as_deref(), Some("B"));
        assert_eq!(top[0].category.as_deref(), Some("creative"));
        assert!((top[0].score - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_limit_is_empty() {
        let corpus = corpus(vec![json!({"id": "a", "score": {"clarity": 1}})]);
        assert!(corpus.top_prompts("clarity", 0).is_empty());
    }
}
