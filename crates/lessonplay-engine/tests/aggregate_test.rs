use lessonplay_engine::{
    LabelStatus, aggregate, read_summary_csv, render_summary_csv, write_summary_csv,
};
use lessonplay_testing::{divisor_transcript, highlow_csv, proposition_transcript, write_file};
use lessonplay_types::{LessonType, Scenario};
use tempfile::TempDir;

fn populate(base: &std::path::Path) {
    write_file(
        base,
        "Rehearsal/김민준 2025. 5. 10. 오전 9-30-00.csv",
        &divisor_transcript(
            "김민준",
            "2025. 5. 10. 오전 9-30-00",
            &[
                ("교사", "120의 약수를 모두 찾아볼까요?"),
                ("학생", "네"),
                ("교사", "2부터 차례로 나눠 봅시다."),
            ],
        ),
    );
    write_file(
        base,
        "Rehearsal/김민준 2025. 5. 10. 오후 2-00-00.csv",
        &divisor_transcript(
            "김민준",
            "2025. 5. 10. 오후 2-00-00",
            &[("교사", "이번에는 60으로 해 볼까요?")],
        ),
    );
    write_file(
        base,
        "TeachingMethod/이서연 2025. 5. 11. 오전 10-00-00.csv",
        &proposition_transcript(
            "이서연",
            "2025. 5. 11. 오전 10-00-00",
            &[
                ("교사", "이 명제는 참일까요?"),
                ("학생", "맞는 것 같아요"),
                ("교사", "근거를 들어 설명해 봅시다."),
            ],
        ),
    );
}

#[test]
fn test_aggregates_a_data_tree() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());

    let report = aggregate(dir.path(), None).unwrap();
    assert!(report.skipped.is_empty());
    assert_eq!(report.labels, LabelStatus::Skipped);
    assert_eq!(report.records.len(), 3);

    let first = &report.records[0];
    assert_eq!(first.lesson, LessonType::Rehearsal);
    assert_eq!(first.user, "김민준");
    assert_eq!(first.scenario, Some(Scenario::Divisor));
    assert_eq!(first.date_code().as_deref(), Some("2025-05-10"));
    assert_eq!(first.time_code().as_deref(), Some("0930"));
    assert_eq!(first.round, 1);
    assert_eq!(first.input_count, 2);
    assert_eq!(first.question_count, 1);
    assert_eq!(first.explanation_count, 1);
    assert!(!first.has_feedback);

    // Second session of the same day ranks round 2 by time of day.
    let second = &report.records[1];
    assert_eq!(second.time_code().as_deref(), Some("1400"));
    assert_eq!(second.round, 2);
    assert_eq!(second.session_id, "김민준_2025-05-10");

    let third = &report.records[2];
    assert_eq!(third.lesson, LessonType::TeachingMethod);
    assert_eq!(third.user, "이서연");
    assert_eq!(third.scenario, Some(Scenario::Proposition));
    assert_eq!(third.round, 1);
    assert_eq!(third.input_count, 2);
    assert!(third.has_feedback);

    for record in &report.records {
        assert_eq!(record.question_count + record.explanation_count, record.input_count);
    }
}

#[test]
fn test_label_join_matches_across_meridiem_spelling() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    let labels = write_file(
        dir.path(),
        "highlow.csv",
        &highlow_csv(&[("김민준 2025. 5. 10. AM 9-30-00.csv", 7, 2)]),
    );

    let report = aggregate(dir.path(), Some(&labels)).unwrap();
    match &report.labels {
        LabelStatus::Applied { matched, .. } => assert_eq!(*matched, 1),
        other => panic!("expected applied labels, got {other:?}"),
    }

    let labeled = &report.records[0];
    assert_eq!(labeled.time_code().as_deref(), Some("0930"));
    assert_eq!((labeled.high, labeled.low), (7, 2));
    assert_eq!((report.records[1].high, report.records[1].low), (0, 0));
}

#[test]
fn test_label_join_matches_extensionless_dotted_filename() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    // Label rows usually hold the already-stripped name, date dots and all.
    let labels = write_file(
        dir.path(),
        "highlow.csv",
        &highlow_csv(&[("김민준 2025. 5. 10. 오전 9-30-00", 7, 2)]),
    );

    let report = aggregate(dir.path(), Some(&labels)).unwrap();
    match &report.labels {
        LabelStatus::Applied { matched, .. } => assert_eq!(*matched, 1),
        other => panic!("expected applied labels, got {other:?}"),
    }
    assert_eq!((report.records[0].high, report.records[0].low), (7, 2));
    assert_eq!((report.records[1].high, report.records[1].low), (0, 0));
}

#[test]
fn test_unusable_label_table_degrades_to_zeros() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    let labels = dir.path().join("없는 라벨.csv");

    let report = aggregate(dir.path(), Some(&labels)).unwrap();
    assert!(matches!(report.labels, LabelStatus::Unavailable { .. }));
    assert!(report.records.iter().all(|r| r.high == 0 && r.low == 0));
}

#[test]
fn test_unreadable_file_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    std::fs::write(dir.path().join("Rehearsal/깨진 파일.csv"), [0xff, 0xfe, 0x00]).unwrap();

    let report = aggregate(dir.path(), None).unwrap();
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.skipped.len(), 1);
    assert!(
        report.skipped[0]
            .path
            .to_string_lossy()
            .contains("깨진 파일")
    );
    assert!(report.skipped[0].reason.contains("IO error"));
}

#[test]
fn test_rerun_reproduces_identical_bytes() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    let labels = write_file(
        dir.path(),
        "highlow.csv",
        &highlow_csv(&[("김민준 2025. 5. 10. AM 9-30-00.csv", 7, 2)]),
    );

    let first = aggregate(dir.path(), Some(&labels)).unwrap();
    let second = aggregate(dir.path(), Some(&labels)).unwrap();
    assert_eq!(
        render_summary_csv(&first.records).unwrap(),
        render_summary_csv(&second.records).unwrap()
    );
}

#[test]
fn test_summary_survives_write_and_read() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    let out = dir.path().join("out/summary.csv");

    let report = aggregate(dir.path(), None).unwrap();
    write_summary_csv(&report.records, &out).unwrap();
    assert_eq!(read_summary_csv(&out).unwrap(), report.records);
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = aggregate(&dir.path().join("없는 폴더"), None).unwrap_err();
    assert!(err.to_string().contains("data root not found"));
}

#[test]
fn test_root_without_lesson_dirs_is_empty_not_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("Rehearsal")).unwrap();

    let report = aggregate(dir.path(), None).unwrap();
    assert!(report.records.is_empty());
    assert!(report.skipped.is_empty());
}
