use crate::error::{Error, Result};
use lessonplay_types::{HighLow, SessionRecord};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Outcome of the optional High/Low label join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelStatus {
    /// Table loaded; `matched` records received their counts.
    Applied { path: PathBuf, matched: usize },
    /// Table missing or unusable; every record keeps zero counts.
    Unavailable { path: PathBuf, reason: String },
    /// No table was requested.
    Skipped,
}

/// External High/Low counts keyed by normalized file name.
///
/// The table is a keyed map: when two rows normalize to the same key the
/// later row wins.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    entries: HashMap<String, HighLow>,
}

impl LabelTable {
    /// Load a label CSV with `Filename`, `High` and `Low` columns.
    ///
    /// Any missing column or unparseable count makes the whole table
    /// unusable; callers degrade to zeros rather than apply half a table.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());
        let headers = reader.headers()?.clone();
        let column = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    Error::Schema(format!("missing column '{}' in {}", name, path.display()))
                })
        };
        let filename_idx = column("Filename")?;
        let high_idx = column("High")?;
        let low_idx = column("Low")?;

        let mut entries = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let Some(filename) = record.get(filename_idx) else {
                continue;
            };
            let high = parse_count(&record, high_idx, "High", path)?;
            let low = parse_count(&record, low_idx, "Low", path)?;
            entries.insert(normalize_label_key(filename), HighLow { high, low });
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<HighLow> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_count(record: &csv::StringRecord, index: usize, name: &str, path: &Path) -> Result<u32> {
    let raw = record.get(index).unwrap_or("").trim();
    raw.parse().map_err(|_| {
        Error::Schema(format!(
            "invalid {} value '{}' in {}",
            name,
            raw,
            path.display()
        ))
    })
}

/// Join High/Low counts onto records by normalized file name.
///
/// Unmatched records keep zeros; a missing or unusable table degrades the
/// whole join to zeros and reports why.
pub fn apply_labels(records: &mut [SessionRecord], path: &Path) -> LabelStatus {
    let table = match LabelTable::load(path) {
        Ok(table) => table,
        Err(err) => {
            return LabelStatus::Unavailable {
                path: path.to_path_buf(),
                reason: err.to_string(),
            };
        }
    };

    let mut matched = 0;
    for record in records.iter_mut() {
        let key = record
            .source_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(normalize_label_key)
            .unwrap_or_default();
        if let Some(counts) = table.get(&key) {
            record.high = counts.high;
            record.low = counts.low;
            matched += 1;
        }
    }

    LabelStatus::Applied {
        path: path.to_path_buf(),
        matched,
    }
}

/// Normalize a file name for label matching: trim, drop a trailing `.csv`,
/// collapse whitespace runs, and map ASCII `AM`/`PM` to 오전/오후.
///
/// Label rows usually carry the extension-less name already, and its dots
/// are date punctuation rather than extension separators. Only a literal
/// `.csv` suffix comes off; an already-normalized name passes through
/// unchanged.
pub fn normalize_label_key(name: &str) -> String {
    let trimmed = name.trim();
    let stem = trimmed.strip_suffix(".csv").unwrap_or(trimmed);
    let collapsed = stem.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("AM", "오전").replace("PM", "오후")
}
