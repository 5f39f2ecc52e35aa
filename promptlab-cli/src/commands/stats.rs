use std::io::Write;

use prompt_analytics::RepositoryStats;

use super::Lab;

/// Prints repository statistics restricted to records that pass validation.
pub fn run(lab: &Lab, out: &mut impl Write) -> anyhow::Result<()> {
    let validator = lab.validator()?;
    let results = validator.validate_directory(lab.prompts_dir());
    let corpus = lab.corpus();

    let stats = RepositoryStats::collect(
        results
            .iter()
            .map(|(path, outcome)| (path.as_path(), outcome.is_valid())),
        &corpus,
    );
    render(&stats, out)?;
    Ok(())
}

fn render(stats: &RepositoryStats, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "\n📊 Prompt Lab Statistics\n")?;
    writeln!(out, "Total Prompts: {}", stats.total)?;
    writeln!(out, "Valid Prompts: {}", stats.valid)?;
    writeln!(out, "\nBy Category:")?;
    for (category, count) in &stats.by_category {
        writeln!(out, "  {category:15} {count:3}")?;
    }
    writeln!(out, "\nUnique Models Tested: {}", stats.models.len())?;
    if !stats.models.is_empty() {
        writeln!(out, "  {}", stats.models.join(", "))?;
    }
    writeln!(out, "\nUnique Tags: {}", stats.unique_tags)
}
