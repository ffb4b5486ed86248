use chrono::{NaiveDate, NaiveTime};
use lessonplay_types::{LessonType, Scenario, SessionRecord};
use std::path::{Path, PathBuf};

/// Write `content` at `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// A proposition-scenario transcript in the standard cell layout: feedback
/// marker at (0,4), metadata on row 1, dialogue rows of (role, message).
pub fn proposition_transcript(user: &str, stamp: &str, turns: &[(&str, &str)]) -> String {
    let mut lines = vec![
        ",,,,AI 피드백".to_string(),
        format!(
            "{},{},,\"선생님, 오늘 수업을 시작할게요\"",
            csv_escape(user),
            csv_escape(stamp)
        ),
    ];
    for (role, message) in turns {
        lines.push(format!(",,{},{}", csv_escape(role), csv_escape(message)));
    }
    lines.join("\n")
}

/// A divisor-scenario transcript: no feedback marker, six setup rows, then
/// dialogue starting at row 8.
pub fn divisor_transcript(user: &str, stamp: &str, turns: &[(&str, &str)]) -> String {
    let mut lines = vec![
        ",,,".to_string(),
        format!(
            "{},{},,120의 약수를 구해 봅시다",
            csv_escape(user),
            csv_escape(stamp)
        ),
    ];
    for _ in 0..6 {
        lines.push(",,,".to_string());
    }
    for (role, message) in turns {
        lines.push(format!(",,{},{}", csv_escape(role), csv_escape(message)));
    }
    lines.join("\n")
}

/// A High/Low label table keyed by file name.
pub fn highlow_csv(rows: &[(&str, u32, u32)]) -> String {
    let mut lines = vec!["Filename,High,Low".to_string()];
    for (filename, high, low) in rows {
        lines.push(format!("{},{},{}", csv_escape(filename), high, low));
    }
    lines.join("\n")
}

/// An annotated utterance table of (날짜, 회차, Potential, TMSSR) rows.
pub fn annotated_utterances_csv(rows: &[(&str, u32, &str, &str)]) -> String {
    let mut lines = vec!["날짜,회차,Potential,TMSSR".to_string()];
    for (date, round, potential, tmssr) in rows {
        lines.push(format!("{},{},{},{}", date, round, potential, tmssr));
    }
    lines.join("\n")
}

/// Two hand-built summary records, one fully populated and one with every
/// optional field absent.
pub fn sample_records() -> Vec<SessionRecord> {
    vec![
        SessionRecord {
            lesson: LessonType::Rehearsal,
            date: NaiveDate::from_ymd_opt(2025, 9, 11),
            time: NaiveTime::from_hms_opt(12, 5, 0),
            scenario: Some(Scenario::Divisor),
            user: "김민준".to_string(),
            session_id: "김민준_2025-09-11".to_string(),
            round: 1,
            input_count: 3,
            question_count: 2,
            explanation_count: 1,
            high: 4,
            low: 1,
            has_feedback: true,
            source_path: PathBuf::from("data/Rehearsal/a.csv"),
        },
        SessionRecord {
            lesson: LessonType::TeachingMethod,
            date: None,
            time: None,
            scenario: None,
            user: "이서연".to_string(),
            session_id: "이서연_".to_string(),
            round: 1,
            input_count: 0,
            question_count: 0,
            explanation_count: 0,
            high: 0,
            low: 0,
            has_feedback: false,
            source_path: PathBuf::from("data/TeachingMethod/b.csv"),
        },
    ]
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
