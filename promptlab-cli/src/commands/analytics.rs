use std::io::Write;

use anyhow::Context;
use prompt_analytics::{ModelComparison, TopPrompt, UNKNOWN_CATEGORY};

use super::Lab;
use crate::cli::AnalyticsCommand;

pub fn run(lab: &Lab, command: AnalyticsCommand, out: &mut impl Write) -> anyhow::Result<()> {
    let corpus = lab.corpus();
    match command {
        AnalyticsCommand::Report { output } => {
            let report = corpus
                .generate_report(output.as_deref())
                .context("failed to write analytics report")?;
            writeln!(out, "{report}")?;
        }
        AnalyticsCommand::Compare { first, second } => {
            write_comparison(&corpus.compare_models(&first, &second), out)?;
        }
        AnalyticsCommand::Top { limit, metric } => {
            let defaults = &lab.config().analytics;
            let limit = limit.unwrap_or(defaults.top);
            let metric = metric.as_deref().unwrap_or(&defaults.metric);
            write_top(limit, metric, &corpus.top_prompts(metric, limit), out)?;
        }
    }
    Ok(())
}

fn write_comparison(comparison: &ModelComparison, out: &mut impl Write) -> std::io::Result<()> {
    let first = &comparison.first_model;
    let second = &comparison.second_model;
    writeln!(out, "\nModel Comparison: {first} vs {second}")?;
    writeln!(out, "\nPrompts tested:")?;
    writeln!(out, "  {first}: {}", comparison.first_tested)?;
    writeln!(out, "  {second}: {}", comparison.second_tested)?;
    writeln!(out, "  Both: {}", comparison.both_tested)?;
    if !comparison.categories.is_empty() {
        writeln!(out, "\nBy category:")?;
        for (category, tally) in &comparison.categories {
            writeln!(
                out,
                "  {category:15} {first}: {}  {second}: {}",
                tally.first, tally.second
            )?;
        }
    }
    Ok(())
}

fn write_top(
    limit: usize,
    metric: &str,
    prompts: &[TopPrompt],
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "\nTop {limit} Prompts by {metric}:")?;
    for (rank, prompt) in prompts.iter().enumerate() {
        writeln!(
            out,
            "  {}. [{}] {} - Score: {}",
            rank + 1,
            prompt.category.as_deref().unwrap_or(UNKNOWN_CATEGORY),
            prompt.title.as_deref().unwrap_or("Untitled"),
            prompt.score
        )?;
    }
    Ok(())
}
