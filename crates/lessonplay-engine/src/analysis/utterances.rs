use crate::error::{Error, Result};
use chrono::NaiveDate;
use lessonplay_types::{Potential, TmssrCategory};
use std::path::Path;

/// One annotated utterance from an analysis input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtteranceRecord {
    pub date: NaiveDate,
    pub round: u32,
    /// High/Low rating; `None` covers blank, `-` and anything unrated.
    pub potential: Option<Potential>,
    /// TMSSR category; `None` marks a `-` cell, which TMSSR views skip
    /// entirely, while blanks and unknown labels fold into `Unknown`.
    pub tmssr: Option<TmssrCategory>,
}

/// Read an annotated utterance CSV.
///
/// `날짜` and `회차` columns are required and every row must carry usable
/// values for them; `Potential` and `TMSSR` are optional columns.
pub fn read_utterances(path: &Path) -> Result<Vec<UtteranceRecord>> {
    let content = std::fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);
    let date_idx = find("날짜").ok_or_else(|| {
        Error::Schema(format!("missing column '날짜' in {}", path.display()))
    })?;
    let round_idx = find("회차").ok_or_else(|| {
        Error::Schema(format!("missing column '회차' in {}", path.display()))
    })?;
    let potential_idx = find("Potential");
    let tmssr_idx = find("TMSSR");

    let mut utterances = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let row = result?;
        let row_number = line + 2;

        let raw_date = row.get(date_idx).unwrap_or("").trim();
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
            Error::Schema(format!(
                "invalid 날짜 '{}' in {} row {}",
                raw_date,
                path.display(),
                row_number
            ))
        })?;

        let raw_round = row.get(round_idx).unwrap_or("").trim();
        let round = raw_round.parse().map_err(|_| {
            Error::Schema(format!(
                "invalid 회차 '{}' in {} row {}",
                raw_round,
                path.display(),
                row_number
            ))
        })?;

        let potential = potential_idx
            .and_then(|idx| row.get(idx))
            .and_then(Potential::from_label);

        let tmssr = match tmssr_idx.and_then(|idx| row.get(idx)) {
            Some(cell) if cell.trim() == "-" => None,
            Some(cell) => Some(TmssrCategory::from_label(cell)),
            None => Some(TmssrCategory::Unknown),
        };

        utterances.push(UtteranceRecord {
            date,
            round,
            potential,
            tmssr,
        });
    }

    Ok(utterances)
}
