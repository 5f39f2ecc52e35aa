use std::fs;
use std::path::Path;

use prompt_analytics::{PromptCorpus, UNKNOWN_CATEGORY};
use serde_json::{Value, json};

fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

fn seed(root: &Path) {
    write_json(
        &root.join("coding/code_001.json"),
        &json!({
            "id": "code-001",
            "title": "Refactor a function",
            "category": "coding",
            "prompt": "Refactor {code}",
            "models_tested": ["gpt-4", "claude-3"],
            "responses": {"gpt-4": "...", "claude-3": "..."},
            "score": {"effectiveness": 4, "clarity": 5}
        }),
    );
    write_json(
        &root.join("coding/code_002.json"),
        &json!({
            "id": "code-002",
            "title": "Write tests",
            "category": "coding",
            "prompt": "Write tests for {code}",
            "models_tested": ["gpt-4"],
            "responses": {"gpt-4": "..."},
            "score": {"effectiveness": 5, "clarity": 3}
        }),
    );
    write_json(
        &root.join("education/edu_001.json"),
        &json!({
            "id": "edu-001",
            "title": "Explain simply",
            "category": "education",
            "prompt": "Explain {concept}",
            "responses": {"claude-3": "..."},
            "score": {"effectiveness": 3}
        }),
    );
    write_json(&root.join("misc/list.json"), &json!(["not", "an", "object"]));
    fs::write(root.join("misc/broken.json"), "{ invalid json }").unwrap();
    fs::write(root.join("misc/readme.txt"), "ignored").unwrap();
}

#[test]
fn skips_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());

    let corpus = PromptCorpus::load(dir.path());
    assert_eq!(corpus.len(), 3);
    let ids: Vec<_> = corpus.entries().iter().filter_map(|e| e.id()).collect();
    assert_eq!(ids, ["code-001", "code-002", "edu-001"]);
}

#[test]
fn full_pipeline_over_disk_corpus() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let corpus = PromptCorpus::load(dir.path());

    let stats = corpus.category_stats();
    assert_eq!(stats["coding"].count, 2);
    assert!((stats["coding"].avg_scores["effectiveness"] - 4.5).abs() < 1e-9);
    assert!((stats["coding"].avg_scores["clarity"] - 4.0).abs() < 1e-9);
    assert!(!stats.contains_key(UNKNOWN_CATEGORY));

    let comparison = corpus.compare_models("gpt-4", "claude-3");
    assert_eq!(comparison.first_tested, 2);
    assert_eq!(comparison.second_tested, 2);
    assert_eq!(comparison.both_tested, 1);

    let top = corpus.top_prompts("effectiveness", 100);
    let ranked: Vec<_> = top.iter().map(|p| p.id.as_deref().unwrap()).collect();
    assert_eq!(ranked, ["code-002", "code-001", "edu-001"]);

    let coverage = corpus.coverage_report();
    assert_eq!(coverage.total_prompts, 3);
    assert_eq!(coverage.total_models, 2);
    assert!((coverage.models["gpt-4"].coverage_percentage - 66.7).abs() < 1e-9);
    assert!((coverage.models["claude-3"].coverage_percentage - 33.3).abs() < 1e-9);

    let out = dir.path().join("report.txt");
    let report = corpus.generate_report(Some(&out)).unwrap();
    assert!(report.contains("Total Prompts: 3"));
    assert_eq!(fs::read_to_string(out).unwrap(), report);
}

#[cfg(unix)]
#[test]
fn symlinked_records_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let shared = tempfile::tempdir().unwrap();
    let target = shared.path().join("edu.json");
    write_json(&target, &json!({"id": "edu-009", "category": "education"}));
    let prompts = dir.path().join("prompts");
    fs::create_dir_all(&prompts).unwrap();
    std::os::unix::fs::symlink(&target, prompts.join("edu.json")).unwrap();

    let corpus = PromptCorpus::load(&prompts);
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.entries()[0].id(), Some("edu-009"));
}
