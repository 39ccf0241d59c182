//! Integration tests for stage unlocking as records change on disk

use pgr_progress::models::{StageKey, StageStatus};
use pgr_progress::records::{FileRecordsSource, RecordsError, RecordsSource};
use std::fs;
use tempfile::TempDir;

fn write_records(dir: &std::path::Path, student_id: &str, viva_teams: &str) {
    let content = format!(r#"{{"student_id": "{student_id}", "viva_teams": {viva_teams}}}"#);
    fs::write(dir.join(format!("{student_id}.json")), content).expect("Should write records");
}

fn available(source: &FileRecordsSource, student_id: &str) -> Vec<bool> {
    source
        .load(student_id)
        .expect("Should load records")
        .progress()
        .stages
        .iter()
        .map(|s| s.available)
        .collect()
}

#[test]
fn test_stages_unlock_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let source = FileRecordsSource::new(temp_dir.path());

    write_records(temp_dir.path(), "s2001", "[]");
    assert_eq!(available(&source, "s2001"), vec![true, false, false]);

    write_records(
        temp_dir.path(),
        "s2001",
        r#"[{"stage": "registration", "status": "scheduled"}]"#,
    );
    assert_eq!(available(&source, "s2001"), vec![true, false, false]);

    write_records(
        temp_dir.path(),
        "s2001",
        r#"[{"stage": "registration", "status": "completed", "outcome": "pass"}]"#,
    );
    assert_eq!(available(&source, "s2001"), vec![true, true, false]);

    write_records(
        temp_dir.path(),
        "s2001",
        r#"[
            {"stage": "registration", "status": "completed", "outcome": "pass"},
            {"stage": "progression", "status": "completed", "outcome": "pass"}
        ]"#,
    );
    assert_eq!(available(&source, "s2001"), vec![true, true, true]);
}

#[test]
fn test_failed_viva_then_repass() {
    let temp_dir = TempDir::new().unwrap();
    let source = FileRecordsSource::new(temp_dir.path());

    write_records(
        temp_dir.path(),
        "s2002",
        r#"[{"stage": "registration", "status": "completed", "outcome": "fail"}]"#,
    );
    let report = source.load("s2002").unwrap().progress();
    assert_eq!(
        report.stage(StageKey::Registration).map(|s| s.status),
        Some(StageStatus::InProgress)
    );
    assert_eq!(available(&source, "s2002"), vec![true, false, false]);

    write_records(
        temp_dir.path(),
        "s2002",
        r#"[
            {"stage": "registration", "status": "completed", "outcome": "fail"},
            {"stage": "registration", "status": "completed", "outcome": "pass"}
        ]"#,
    );
    assert_eq!(available(&source, "s2002"), vec![true, true, false]);
}

#[test]
fn test_yaml_records_are_supported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("s2003.yaml"),
        "viva_teams:\n  - stage: registration\n    status: completed\n    outcome: pass\n\
         \x20 - stage: progression\n    status: approved\n",
    )
    .unwrap();

    let source = FileRecordsSource::new(temp_dir.path());
    let report = source.load("s2003").unwrap().progress();
    assert_eq!(
        report.stage(StageKey::Progression).map(|s| s.status),
        Some(StageStatus::VivaApproved)
    );
    assert_eq!(report.student_id.as_deref(), Some("s2003"));
}

#[test]
fn test_missing_student_reports_directory() {
    let temp_dir = TempDir::new().unwrap();
    let source = FileRecordsSource::new(temp_dir.path());
    let err = source.load("s9999").unwrap_err();
    assert!(matches!(err, RecordsError::NotFound { .. }));
    assert!(err.to_string().contains("s9999"));
}
