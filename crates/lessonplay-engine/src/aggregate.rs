use crate::error::Result;
use crate::labels::{LabelStatus, apply_labels};
use lessonplay_transcripts::{
    RawTranscript, TranscriptProfile, discover_transcripts, profile_transcript,
};
use lessonplay_types::{LessonType, Scenario, SessionRecord, SkippedFile};
use std::path::Path;

/// Result of one aggregation run over the data root.
#[derive(Debug)]
pub struct AggregateReport {
    /// All summarized sessions, sorted and with rounds assigned.
    pub records: Vec<SessionRecord>,
    /// Files that could not be read; the run continues past them.
    pub skipped: Vec<SkippedFile>,
    /// What happened to the optional High/Low label join.
    pub labels: LabelStatus,
}

/// Aggregate every transcript under `base_dir` into summary records.
///
/// Each file is read and profiled independently; a file that fails to read
/// lands in `skipped` instead of failing the run. Records are then sorted
/// by (lesson, date, user, time) with absent values first, rounds assigned
/// within each (lesson, date, user) group, and High/Low labels joined when
/// a label table path is given. The whole result is recomputed from the
/// files on every call, so unchanged inputs reproduce the same report.
pub fn aggregate(base_dir: &Path, labels_path: Option<&Path>) -> Result<AggregateReport> {
    let discovered = discover_transcripts(base_dir)?;

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for transcript in discovered {
        match RawTranscript::read(&transcript.path) {
            Ok(table) => {
                let profile = profile_transcript(&table, &transcript.path);
                records.push(record_from_profile(transcript.lesson, &transcript.path, profile));
            }
            Err(err) => skipped.push(SkippedFile {
                path: transcript.path,
                reason: err.to_string(),
            }),
        }
    }

    sort_records(&mut records);
    assign_rounds(&mut records);

    let labels = match labels_path {
        Some(path) => apply_labels(&mut records, path),
        None => LabelStatus::Skipped,
    };

    Ok(AggregateReport {
        records,
        skipped,
        labels,
    })
}

fn record_from_profile(
    lesson: LessonType,
    path: &Path,
    profile: TranscriptProfile,
) -> SessionRecord {
    let date = profile.stamp.map(|s| s.date);
    let time = profile.stamp.map(|s| s.time);
    let date_code = date.map(|d| d.to_string()).unwrap_or_default();

    SessionRecord {
        lesson,
        date,
        time,
        scenario: profile.scenario,
        session_id: format!("{}_{}", profile.user, date_code),
        user: profile.user,
        round: 0,
        input_count: profile.counts.input,
        question_count: profile.counts.questions,
        explanation_count: profile.counts.explanations,
        high: 0,
        low: 0,
        has_feedback: profile.has_feedback,
        source_path: path.to_path_buf(),
    }
}

/// Stable sort; ties keep discovery order, and `None` dates and times sort
/// first the way empty strings do in the exported table.
fn sort_records(records: &mut [SessionRecord]) {
    records.sort_by(|a, b| {
        (a.lesson, a.date, a.user.as_str(), a.time).cmp(&(b.lesson, b.date, b.user.as_str(), b.time))
    });
}

/// 1-based rank within each contiguous (lesson, date, user) group.
fn assign_rounds(records: &mut [SessionRecord]) {
    let mut start = 0;
    while start < records.len() {
        let mut end = start + 1;
        while end < records.len() && same_group(&records[start], &records[end]) {
            end += 1;
        }
        for (offset, record) in records[start..end].iter_mut().enumerate() {
            record.round = (offset + 1) as u32;
        }
        start = end;
    }
}

fn same_group(a: &SessionRecord, b: &SessionRecord) -> bool {
    a.lesson == b.lesson && a.date == b.date && a.user == b.user
}

/// Record selection used by the summary display and export.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub lesson: Option<LessonType>,
    pub scenario: Option<Scenario>,
    pub user: Option<String>,
    /// Keep sessions with zero teacher messages; excluded by default.
    pub include_empty: bool,
}

impl RecordFilter {
    pub fn matches(&self, record: &SessionRecord) -> bool {
        if let Some(lesson) = self.lesson
            && record.lesson != lesson
        {
            return false;
        }
        if let Some(scenario) = self.scenario
            && record.scenario != Some(scenario)
        {
            return false;
        }
        if let Some(user) = &self.user
            && record.user != *user
        {
            return false;
        }
        if !self.include_empty && record.input_count == 0 {
            return false;
        }
        true
    }

    pub fn apply(&self, records: &[SessionRecord]) -> Vec<SessionRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
