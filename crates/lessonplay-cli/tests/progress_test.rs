mod common;
use common::TestFixture;

use lessonplay_testing::{divisor_transcript, proposition_transcript};
use predicates::prelude::*;
use std::path::PathBuf;

fn seed_and_export(fixture: &TestFixture) -> PathBuf {
    fixture.write_transcript(
        "Rehearsal",
        "김민준 2025. 5. 10. 오전 9-30-00.csv",
        &divisor_transcript(
            "김민준",
            "2025. 5. 10. 오전 9-30-00",
            &[("교사", "120의 약수를 모두 찾아볼까요?")],
        ),
    );
    fixture.write_transcript(
        "Rehearsal",
        "김민준 2025. 5. 10. 오후 2-00-00.csv",
        &divisor_transcript(
            "김민준",
            "2025. 5. 10. 오후 2-00-00",
            &[("교사", "이번에는 60으로 해 볼까요?")],
        ),
    );
    fixture.write_transcript(
        "TeachingMethod",
        "이서연 2025. 5. 11. 오전 10-00-00.csv",
        &proposition_transcript(
            "이서연",
            "2025. 5. 11. 오전 10-00-00",
            &[("교사", "이 명제는 참일까요?")],
        ),
    );

    let out = fixture.data_dir().join("summary.csv");
    fixture
        .command()
        .arg("summarize")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();
    out
}

#[test]
fn test_progress_charts_rounds_per_day() {
    let fixture = TestFixture::new();
    seed_and_export(&fixture);

    fixture
        .command()
        .arg("progress")
        .arg("--user")
        .arg("김민준")
        .assert()
        .success()
        .stdout(predicate::str::contains("김민준 - 약수"))
        .stdout(predicate::str::contains("05/10 (1회)"))
        .stdout(predicate::str::contains("05/10 (2회)"))
        .stdout(predicate::str::contains("이서연").not());
}

#[test]
fn test_progress_json_series() {
    let fixture = TestFixture::new();
    seed_and_export(&fixture);

    let output = fixture
        .command()
        .arg("--format")
        .arg("json")
        .arg("progress")
        .arg("--user")
        .arg("김민준")
        .output()
        .expect("Failed to run progress");
    assert!(
        output.status.success(),
        "progress failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let series: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let series = series.as_array().unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0]["user"], "김민준");
    assert_eq!(series[0]["scenario"], "약수");

    let points = series[0]["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["label"], "05/10 (1회)");
    assert_eq!(points[0]["date"], "2025-05-10");
    assert_eq!(points[1]["round"], 2);
}

#[test]
fn test_progress_filters_by_scenario() {
    let fixture = TestFixture::new();
    seed_and_export(&fixture);

    fixture
        .command()
        .arg("progress")
        .arg("--scenario")
        .arg("proposition")
        .assert()
        .success()
        .stdout(predicate::str::contains("이서연 - 명제"))
        .stdout(predicate::str::contains("김민준").not());
}

#[test]
fn test_progress_reads_explicit_summary_path() {
    let fixture = TestFixture::new();
    let default = seed_and_export(&fixture);
    let moved = fixture.root().join("보관/summary.csv");
    std::fs::create_dir_all(moved.parent().unwrap()).unwrap();
    std::fs::rename(&default, &moved).unwrap();

    fixture
        .command()
        .arg("progress")
        .arg("--summary")
        .arg(&moved)
        .assert()
        .success()
        .stdout(predicate::str::contains("김민준"));
}

#[test]
fn test_progress_without_summary_warns_and_succeeds() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("progress")
        .assert()
        .success()
        .stderr(predicate::str::contains("no summary at"));
}
