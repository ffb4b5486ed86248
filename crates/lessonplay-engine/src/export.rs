use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use lessonplay_types::{LessonType, Scenario, SessionRecord};
use std::path::Path;

/// Column order of the summary artifact. The Korean headers are part of
/// the artifact contract; downstream spreadsheets key on them.
pub const SUMMARY_COLUMNS: [&str; 13] = [
    "수업",
    "날짜",
    "시간",
    "시나리오",
    "사용자",
    "회차",
    "입력 수",
    "발문 수",
    "설명 수",
    "High",
    "Low",
    "피드백 유무",
    "파일 경로",
];

/// Render records as the summary CSV: UTF-8 with a BOM so spreadsheet
/// tools pick the right encoding, absent fields as empty strings, feedback
/// as 1/0.
pub fn render_summary_csv(records: &[SessionRecord]) -> Result<Vec<u8>> {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    {
        let mut writer = csv::Writer::from_writer(&mut data);
        writer.write_record(SUMMARY_COLUMNS)?;
        for record in records {
            writer.write_record(&summary_row(record))?;
        }
        writer.flush()?;
    }
    Ok(data)
}

/// Write the summary CSV, creating parent directories as needed.
pub fn write_summary_csv(records: &[SessionRecord], path: &Path) -> Result<()> {
    let data = render_summary_csv(records)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

/// Read a previously written summary CSV back into records.
pub fn read_summary_csv(path: &Path) -> Result<Vec<SessionRecord>> {
    let content = std::fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    let index = SummaryIndex::from_headers(&headers, path)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(index.parse_row(&row, path)?);
    }
    Ok(records)
}

fn summary_row(record: &SessionRecord) -> [String; 13] {
    [
        record.lesson.to_string(),
        record.date_code().unwrap_or_default(),
        record.time_code().unwrap_or_default(),
        record
            .scenario
            .map(|s| s.to_string())
            .unwrap_or_default(),
        record.user.clone(),
        record.round.to_string(),
        record.input_count.to_string(),
        record.question_count.to_string(),
        record.explanation_count.to_string(),
        record.high.to_string(),
        record.low.to_string(),
        if record.has_feedback { "1" } else { "0" }.to_string(),
        record.source_path.display().to_string(),
    ]
}

/// Positions of the summary columns in a read-back header row.
struct SummaryIndex {
    columns: [usize; 13],
}

impl SummaryIndex {
    fn from_headers(headers: &csv::StringRecord, path: &Path) -> Result<Self> {
        let mut columns = [0; 13];
        for (slot, name) in columns.iter_mut().zip(SUMMARY_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    Error::Schema(format!("missing column '{}' in {}", name, path.display()))
                })?;
        }
        Ok(Self { columns })
    }

    fn parse_row(&self, row: &csv::StringRecord, path: &Path) -> Result<SessionRecord> {
        let cell = |column: usize| row.get(self.columns[column]).unwrap_or("").trim();
        let invalid = |what: &str, raw: &str| {
            Error::Schema(format!("invalid {} '{}' in {}", what, raw, path.display()))
        };

        let lesson = LessonType::from_dir_name(cell(0))
            .ok_or_else(|| invalid("수업", cell(0)))?;
        let date = match cell(1) {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid("날짜", raw))?,
            ),
        };
        let time = match cell(2) {
            "" => None,
            raw => Some(
                NaiveTime::parse_from_str(raw, "%H%M").map_err(|_| invalid("시간", raw))?,
            ),
        };
        let scenario = Scenario::from_label(cell(3));
        let user = cell(4).to_string();
        let round = cell(5).parse().map_err(|_| invalid("회차", cell(5)))?;
        let input_count = cell(6).parse().map_err(|_| invalid("입력 수", cell(6)))?;
        let question_count = cell(7).parse().map_err(|_| invalid("발문 수", cell(7)))?;
        let explanation_count = cell(8).parse().map_err(|_| invalid("설명 수", cell(8)))?;
        let high = cell(9).parse().map_err(|_| invalid("High", cell(9)))?;
        let low = cell(10).parse().map_err(|_| invalid("Low", cell(10)))?;
        let has_feedback = cell(11) == "1";
        let source_path = cell(12).into();

        let date_code = date.map(|d: NaiveDate| d.to_string()).unwrap_or_default();
        Ok(SessionRecord {
            lesson,
            date,
            time,
            scenario,
            session_id: format!("{}_{}", user, date_code),
            user,
            round,
            input_count,
            question_count,
            explanation_count,
            high,
            low,
            has_feedback,
            source_path,
        })
    }
}
