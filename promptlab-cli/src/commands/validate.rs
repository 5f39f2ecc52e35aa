use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use prompt_validator::ValidationOutcome;

use super::Lab;

/// Validates one file, or every JSON file below a directory. Without a path
/// the prompts directory is validated.
pub fn run(lab: &Lab, path: Option<&Path>, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let validator = lab.validator()?;

    let directory = match path {
        Some(path) if !path.is_dir() => {
            let outcome = validator.validate_file(path);
            print_file(lab, path, &outcome, out)?;
            return Ok(exit_code(outcome.is_valid()));
        }
        Some(path) => path.to_path_buf(),
        None => lab.prompts_dir(),
    };

    let results = validator.validate_directory(&directory);
    let passed = results.values().filter(|outcome| outcome.is_valid()).count();
    let failed = results.len() - passed;

    writeln!(out, "\n📊 Validation Results")?;
    writeln!(
        out,
        "   Total: {} | ✅ Passed: {passed} | ❌ Failed: {failed}\n",
        results.len()
    )?;
    for (file, outcome) in &results {
        let shown = lab.display_path(file);
        match outcome.error() {
            None => {
                writeln!(out, "✅ {shown}")?;
                for warning in outcome.warnings() {
                    writeln!(out, "   ⚠️  {warning}")?;
                }
            }
            Some(error) => {
                writeln!(out, "❌ {shown}")?;
                writeln!(out, "   {error}")?;
            }
        }
    }

    Ok(exit_code(failed == 0))
}

fn print_file(
    lab: &Lab,
    path: &Path,
    outcome: &ValidationOutcome,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let shown = lab.display_path(path);
    match outcome.error() {
        None => {
            writeln!(out, "✅ {shown} passed validation.")?;
            if !outcome.warnings().is_empty() {
                writeln!(out, "⚠️  Warnings:")?;
                for warning in outcome.warnings() {
                    writeln!(out, "   - {warning}")?;
                }
            }
        }
        Some(error) => {
            writeln!(out, "❌ {shown} failed validation:")?;
            writeln!(out, "   {error}")?;
        }
    }
    Ok(())
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use prompt_config::LabConfig;
    use serde_json::json;

    use super::*;

    fn lab_with(records: &[(&str, serde_json::Value)]) -> (tempfile::TempDir, Lab) {
        let dir = tempfile::tempdir().unwrap();
        let prompts = dir.path().join("prompts/coding");
        fs::create_dir_all(&prompts).unwrap();
        for (name, record) in records {
            fs::write(prompts.join(name), record.to_string()).unwrap();
        }
        let config = LabConfig::discover(dir.path()).unwrap();
        (dir, Lab::new(config))
    }

    fn record(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Review a diff",
            "category": "coding",
            "prompt": "Review {diff}",
            "variables": ["diff", "style"],
            "responses": {}
        })
    }

    #[test]
    fn directory_run_reports_failures() {
        let (_dir, lab) = lab_with(&[("a.json", record("code-001")), ("b.json", record("BAD"))]);
        let mut out = Vec::new();

        let code = run(&lab, None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert!(text.contains("Total: 2 | ✅ Passed: 1 | ❌ Failed: 1"));
        assert!(text.contains("✅ prompts/coding/a.json"));
        assert!(text.contains("⚠️  Variable 'style' not found in prompt text"));
        assert!(text.contains("❌ prompts/coding/b.json"));
    }

    #[test]
    fn single_file_prints_warnings() {
        let (dir, lab) = lab_with(&[("a.json", record("code-001"))]);
        let file = dir.path().join("prompts/coding/a.json");
        let mut out = Vec::new();

        let code = run(&lab, Some(&file), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(text.contains("passed validation."));
        assert!(text.contains("   - Variable 'style' not found in prompt text"));
    }

    #[test]
    fn missing_file_fails() {
        let (dir, lab) = lab_with(&[]);
        let mut out = Vec::new();

        let code = run(&lab, Some(&dir.path().join("nope.json")), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert!(text.contains("File not found"));
    }
}
