use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use prompt_primitives::{Category, PromptId, PromptRecord, placeholders};
use tracing::info;

use super::Lab;

/// Answers collected by the wizard.
struct Answers {
    id: String,
    title: String,
    category: String,
    goal: String,
    prompt: String,
    variables: Vec<String>,
    tags: Vec<String>,
}

impl Answers {
    fn into_record(self, today: &str) -> prompt_primitives::Result<PromptRecord> {
        let id = PromptId::new(self.id)?;
        let category: Category = self.category.parse()?;
        let mut builder = PromptRecord::builder(id, category)
            .title(self.title)?
            .prompt(self.prompt)?
            .variables(self.variables)
            .tags(self.tags)
            .models_tested(Vec::<String>::new())
            .empty_responses()
            .last_updated(today);
        if !self.goal.is_empty() {
            builder = builder.goal(self.goal);
        }
        builder.build()
    }
}

/// Interactive creation wizard. Returns the path of the written record, or
/// `None` when the answers did not form a valid record.
pub fn run(
    lab: &Lab,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<PathBuf>> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    create(lab, &today, input, out)
}

fn create(
    lab: &Lab,
    today: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<PathBuf>> {
    let validator = lab.validator()?;

    writeln!(out, "🧠 Prompt Lab - Create New Prompt\n")?;
    let id = ask(input, out, "Prompt ID (e.g., edu-001): ")?;
    let title = ask(input, out, "Title: ")?;
    let names: Vec<&str> = Category::ALL.into_iter().map(Category::as_str).collect();
    writeln!(out, "\nCategories: {}", names.join(", "))?;
    let category = ask(input, out, "Category: ")?;
    let goal = ask(input, out, "Goal/Purpose: ")?;
    let prompt = ask(input, out, "Prompt text: ")?;

    let detected = placeholders(&prompt);
    let question = if detected.is_empty() {
        "Variables (comma-separated, or press Enter to skip): ".to_owned()
    } else {
        format!(
            "Variables (comma-separated, or press Enter to use {}): ",
            detected.join(", ")
        )
    };
    let variables = match split_list(&ask(input, out, &question)?) {
        listed if listed.is_empty() => detected,
        listed => listed,
    };
    let tags = split_list(&ask(input, out, "Tags (comma-separated): ")?);

    let answers = Answers {
        id,
        title,
        category,
        goal,
        prompt,
        variables,
        tags,
    };
    let record = match answers.into_record(today) {
        Ok(record) => record,
        Err(err) => {
            writeln!(out, "\n❌ Validation failed: {err}")?;
            return Ok(None);
        }
    };

    let outcome = validator.validate_record(&record);
    if let Some(error) = outcome.error() {
        writeln!(out, "\n❌ Validation failed: {error}")?;
        return Ok(None);
    }
    if !outcome.warnings().is_empty() {
        writeln!(out, "\n⚠️  Warnings:")?;
        for warning in outcome.warnings() {
            writeln!(out, "   - {warning}")?;
        }
    }

    let dir = lab.prompts_dir().join(record.category().as_str());
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(record.file_name());
    let body = serde_json::to_string_pretty(&record).context("failed to serialise record")?;
    fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), id = %record.id(), "created prompt");

    writeln!(out, "\n✅ Prompt created: {}", lab.display_path(&path))?;
    writeln!(out, "\n💡 Next steps:")?;
    writeln!(out, "   1. Test with AI models")?;
    writeln!(out, "   2. Add responses to the JSON file")?;
    writeln!(out, "   3. Add scores after evaluation")?;
    Ok(Some(path))
}

fn ask(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> anyhow::Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read answer")?;
    Ok(line.trim().to_owned())
}

fn split_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use prompt_config::LabConfig;
    use serde_json::Value;

    use super::*;

    fn lab() -> (tempfile::TempDir, Lab) {
        let dir = tempfile::tempdir().unwrap();
        let config = LabConfig::discover(dir.path()).unwrap();
        (dir, Lab::new(config))
    }

    fn answer(lines: &[&str]) -> Cursor<Vec<u8>> {
        Cursor::new(format!("{}\n", lines.join("\n")).into_bytes())
    }

    #[test]
    fn writes_record_under_category() {
        let (dir, lab) = lab();
        let mut input = answer(&[
            "edu-001",
            "Explain Like A Tutor",
            "education",
            "Teach concepts",
            "Explain {concept} to a {audience}",
            "",
            "teaching, basics",
        ]);
        let mut out = Vec::new();

        let path = create(&lab, "2026-10-16", &mut input, &mut out)
            .unwrap()
            .expect("record written");

        assert_eq!(
            path,
            dir.path()
                .join("prompts/education/edu_001_explain_like_a_tutor.json")
        );
        let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["variables"], serde_json::json!(["concept", "audience"]));
        assert_eq!(saved["tags"], serde_json::json!(["teaching", "basics"]));
        assert_eq!(saved["models_tested"], serde_json::json!([]));
        assert_eq!(saved["responses"], serde_json::json!({}));
        assert_eq!(saved["last_updated"], "2026-10-16");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("or press Enter to use concept, audience"));
        assert!(text.contains("✅ Prompt created: prompts/education/"));
    }

    #[test]
    fn warns_about_unused_variables() {
        let (_dir, lab) = lab();
        let mut input = answer(&[
            "code-007",
            "Review",
            "coding",
            "",
            "Review this diff",
            "diff",
            "",
        ]);
        let mut out = Vec::new();

        let path = create(&lab, "2026-10-16", &mut input, &mut out).unwrap();
        assert!(path.is_some());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("   - Variable 'diff' not found in prompt text"));
    }

    #[test]
    fn rejects_bad_category_without_writing() {
        let (dir, lab) = lab();
        let mut input = answer(&["code-008", "Review", "music", "", "Review", "", ""]);
        let mut out = Vec::new();

        let path = create(&lab, "2026-10-16", &mut input, &mut out).unwrap();
        assert!(path.is_none());
        assert!(String::from_utf8(out).unwrap().contains("❌ Validation failed: invalid category `music`"));
        assert!(!dir.path().join("prompts").exists());
    }

    #[test]
    fn rejects_bad_id() {
        let (_dir, lab) = lab();
        let mut input = answer(&["Code_9", "Review", "coding", "", "Review", "", ""]);
        let mut out = Vec::new();

        assert!(create(&lab, "2026-10-16", &mut input, &mut out).unwrap().is_none());
        assert!(String::from_utf8(out).unwrap().contains("invalid prompt id `Code_9`"));
    }

    #[test]
    fn splits_and_trims_lists() {
        assert_eq!(split_list(" a, b ,,c "), ["a", "b", "c"]);
        assert!(split_list("").is_empty());
    }
}
