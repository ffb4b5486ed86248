use crate::counter::{MessageCounts, count_teacher_messages};
use crate::datetime::{SessionStamp, parse_stamp, parse_stamp_from_filename};
use crate::scenario::classify_scenario;
use crate::schema;
use crate::table::RawTranscript;
use lessonplay_types::Scenario;
use std::path::Path;

/// Everything extracted from a single transcript before aggregation.
#[derive(Debug, Clone)]
pub struct TranscriptProfile {
    pub user: String,
    pub stamp: Option<SessionStamp>,
    pub scenario: Option<Scenario>,
    pub counts: MessageCounts,
    pub has_feedback: bool,
}

/// Extract the per-file profile from a raw table.
///
/// The timestamp cell is tried first and the file name second; both failing
/// leaves the stamp absent. Missing cells degrade to empty or false, never
/// to an error.
pub fn profile_transcript(table: &RawTranscript, path: &Path) -> TranscriptProfile {
    let user = table.cell_at(schema::meta::USER).unwrap_or("").to_string();

    let stamp = table
        .cell_at(schema::meta::TIMESTAMP)
        .and_then(parse_stamp)
        .or_else(|| parse_stamp_from_filename(path));

    let scenario = table
        .cell_at(schema::meta::SCENARIO_PROMPT)
        .and_then(classify_scenario);

    let counts = count_teacher_messages(table, scenario);

    let has_feedback = table
        .cell_at(schema::meta::FEEDBACK_MARKER)
        .map(|cell| cell.contains(schema::FEEDBACK_MARK))
        .unwrap_or(false);

    TranscriptProfile {
        user,
        stamp,
        scenario,
        counts,
        has_feedback,
    }
}
