//! Human-readable analytics report.

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use tracing::info;

use crate::corpus::PromptCorpus;
use crate::error::{ReportError, ReportResult};

const RULE_WIDTH: usize = 60;

/// Full analytics report of a corpus: totals, per-category breakdown, and
/// per-model coverage. Rendered through [`Display`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    corpus: &'a PromptCorpus,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "AI PROMPT LAB - ANALYTICS REPORT")?;
        writeln!(f, "{heavy}")?;
        writeln!(f)?;
        writeln!(f, "Total Prompts: {}", self.corpus.len())?;
        writeln!(f)?;

        writeln!(f, "CATEGORY BREAKDOWN")?;
        writeln!(f, "{light}")?;
        for (category, stats) in self.corpus.category_stats() {
            writeln!(f)?;
            writeln!(f, "{}", category.to_uppercase())?;
            writeln!(f, "  Prompts: {}", stats.count)?;
            if !stats.avg_scores.is_empty() {
                writeln!(f, "  Average Scores:")?;
                for (metric, score) in &stats.avg_scores {
                    writeln!(f, "    {metric}: {score}")?;
                }
            }
            writeln!(f, "  Models: {}", stats.models_used.join(", "))?;
        }
        writeln!(f)?;

        writeln!(f, "MODEL COVERAGE")?;
        writeln!(f, "{light}")?;
        for (model, coverage) in self.corpus.coverage_report().models {
            writeln!(f)?;
            writeln!(f, "{model}")?;
            writeln!(f, "  Prompts tested: {}", coverage.total_prompts)?;
            writeln!(f, "  Categories covered: {}", coverage.categories_covered)?;
            writeln!(f, "  Coverage: {}%", coverage.coverage_percentage)?;
        }
        writeln!(f)?;
        write!(f, "{heavy}")
    }
}

impl PromptCorpus {
    /// Returns the analytics report of this corpus.
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report { corpus: self }
    }

    /// Renders the full analytics report as text.
    #[must_use]
    pub fn render_report(&self) -> String {
        self.report().to_string()
    }

    /// Renders the report and, when `output` is given, also writes it there.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the report file cannot be written.
    pub fn generate_report(&self, output: Option<&Path>) -> ReportResult<String> {
        let report = self.render_report();
        if let Some(path) = output {
            fs::write(path, &report).map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), "wrote analytics report");
        }
        Ok(report)
    }
}
