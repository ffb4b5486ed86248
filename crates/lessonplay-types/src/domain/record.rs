use crate::domain::{LessonType, Scenario};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One summarized session, produced from a single transcript file.
///
/// Date, time and scenario stay optional all the way through; they render
/// as empty fields only when the summary table is written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub lesson: LessonType,
    pub date: Option<NaiveDate>,
    #[serde(with = "time_code")]
    pub time: Option<NaiveTime>,
    pub scenario: Option<Scenario>,
    pub user: String,
    /// User name joined with the rendered date, e.g. `김민준_2025-09-11`.
    pub session_id: String,
    /// 1-based rank within the (lesson, date, user) group, ordered by time.
    pub round: u32,
    /// Teacher messages attributed to this session.
    pub input_count: usize,
    /// Teacher messages whose trimmed text ends with `?`.
    pub question_count: usize,
    /// `input_count - question_count`.
    pub explanation_count: usize,
    pub high: u32,
    pub low: u32,
    pub has_feedback: bool,
    pub source_path: PathBuf,
}

impl SessionRecord {
    /// Four-digit `HHMM` rendering of the session time, if known.
    pub fn time_code(&self) -> Option<String> {
        self.time.map(|t| t.format("%H%M").to_string())
    }

    /// ISO `YYYY-MM-DD` rendering of the session date, if known.
    pub fn date_code(&self) -> Option<String> {
        self.date.map(|d| d.to_string())
    }
}

/// Serialize the session time as the compact `HHMM` code used everywhere
/// in the summary artifacts, instead of chrono's `HH:MM:SS` default.
mod time_code {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_some(&time.format("%H%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => NaiveTime::parse_from_str(&raw, "%H%M")
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// A transcript that could not be read; aggregation records it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SessionRecord {
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
        }
    }

    #[test]
    fn test_time_code_rendering() {
        let record = sample_record();
        assert_eq!(record.time_code().as_deref(), Some("1205"));
        assert_eq!(record.date_code().as_deref(), Some("2025-09-11"));
    }

    #[test]
    fn test_serializes_time_as_code() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["time"], "1205");
        assert_eq!(json["date"], "2025-09-11");
        assert_eq!(json["scenario"], "약수");
    }

    #[test]
    fn test_round_trips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let mut record = sample_record();
        record.date = None;
        record.time = None;
        record.scenario = None;
        let json = serde_json::to_value(record).unwrap();
        assert!(json["date"].is_null());
        assert!(json["time"].is_null());
        assert!(json["scenario"].is_null());
    }
}
