use crate::error::Result;
use std::path::Path;

/// A transcript file read as a headerless, positionally indexed table.
///
/// Rows may have different widths; every access is by `(row, column)` and
/// returns `None` past the edge of a row. Nothing here interprets content.
#[derive(Debug, Clone)]
pub struct RawTranscript {
    rows: Vec<Vec<String>>,
}

impl RawTranscript {
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        // Spreadsheet exports prefix a UTF-8 BOM.
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(Self { rows })
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn cell_at(&self, position: (usize, usize)) -> Option<&str> {
        self.cell(position.0, position.1)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row in the table, the positional equivalent of a column count.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }
}
