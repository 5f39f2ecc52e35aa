use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use prompt_primitives::json_files;
use prompt_validator::validator::read_document;
use serde_json::Value;

use super::Lab;

/// Lists every prompt, or only the prompts stored directly in one category
/// directory.
pub fn run(lab: &Lab, category: Option<&str>, out: &mut impl Write) -> anyhow::Result<()> {
    let prompts = lab.prompts_dir();
    let files = match category {
        Some(category) => {
            let dir = prompts.join(category);
            if !dir.is_dir() {
                writeln!(out, "❌ Category '{category}' not found")?;
                return Ok(());
            }
            shallow_json_files(&dir)?
        }
        None => json_files(&prompts),
    };

    writeln!(out, "\n📚 Found {} prompts:\n", files.len())?;
    for path in &files {
        match read_document(path) {
            Ok(document) => {
                let category = text_field(&document, "category", "unknown");
                let id = text_field(&document, "id", "?");
                let title = text_field(&document, "title", "Untitled");
                writeln!(out, "  [{category:12}] {id:15} - {title}")?;
            }
            Err(err) => {
                let name = path.file_name().unwrap_or(path.as_os_str());
                writeln!(out, "  ⚠️  Error reading {}: {err}", name.to_string_lossy())?;
            }
        }
    }
    Ok(())
}

fn shallow_json_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

fn text_field<'a>(document: &'a Value, key: &str, fallback: &'a str) -> &'a str {
    document.get(key).and_then(Value::as_str).unwrap_or(fallback)
}
