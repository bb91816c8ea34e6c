//! Integration tests for the generation hand-off

use paperplan::adapters::{create_sink, DirectorySink, JobSink};
use paperplan::config::GenerationConfig;
use paperplan::core::fingerprint::fingerprint;
use paperplan::core::generation::GenerationJob;
use paperplan::core::preview::preview;
use paperplan::domain::{load_blueprint, PaperplanError};
use std::fs;
use tempfile::TempDir;

const BOARD_BLUEPRINT: &str = r#"
domain = "cbse"
duration_minutes = 90

[by_type_domain]
single_correct = 10
short2 = 5
case_based = 2

[[sections]]
name = "A"
types = ["single_correct"]
count = 10

[[sections]]
name = "B"
types = ["short2", "case_based"]
count = 7
"#;

#[tokio::test]
async fn test_job_carries_the_previewed_blueprint_unchanged() {
    let dir = TempDir::new().unwrap();
    let blueprint_path = dir.path().join("board.toml");
    fs::write(&blueprint_path, BOARD_BLUEPRINT).unwrap();

    let input = load_blueprint(&blueprint_path).unwrap();
    let previewed = preview(&input).unwrap();
    let job = GenerationJob::prepare(&input).unwrap();

    assert_eq!(job.blueprint, previewed);
    assert_eq!(job.blueprint.totals.total_questions, 17);
    assert_eq!(job.blueprint.totals.total_marks, 10 + 5 * 2 + 2 * 4);

    let config = GenerationConfig {
        output_dir: dir.path().join("jobs").to_string_lossy().to_string(),
        dry_run: false,
    };
    let sink = create_sink(&config).unwrap();
    let receipt = sink.submit(&job).await.unwrap();

    let stored: GenerationJob =
        serde_json::from_str(&fs::read_to_string(&receipt.location).unwrap()).unwrap();
    assert_eq!(stored.job_id, job.job_id);
    assert_eq!(stored.blueprint, previewed);
    assert_eq!(stored.fingerprint, fingerprint(&previewed).unwrap());
}

#[tokio::test]
async fn test_invalid_preview_never_reaches_a_sink() {
    let dir = TempDir::new().unwrap();
    let blueprint_path = dir.path().join("empty.json");
    fs::write(&blueprint_path, r#"{"domain": "general", "sections": [{"count": 0}]}"#).unwrap();

    let input = load_blueprint(&blueprint_path).unwrap();
    let result = GenerationJob::prepare(&input);

    assert!(matches!(result, Err(PaperplanError::Generation(_))));
}

#[tokio::test]
async fn test_dry_run_sink_reports_location_without_writing() {
    let dir = TempDir::new().unwrap();
    let jobs = dir.path().join("jobs");
    let sink = DirectorySink::new(&jobs, true);

    let input = paperplan::domain::BlueprintBuilder::new("general")
        .type_count("mcq", 5)
        .build();
    let job = GenerationJob::prepare(&input).unwrap();
    let receipt = sink.submit(&job).await.unwrap();

    assert!(receipt.dry_run);
    assert!(receipt.location.ends_with(&job.file_name()));
    assert!(!jobs.exists());
}

#[test]
fn test_unsupported_blueprint_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("paper.yaml");
    fs::write(&path, "domain: general").unwrap();

    assert!(matches!(
        load_blueprint(&path),
        Err(PaperplanError::Configuration(_))
    ));
}
