pub mod aggregate;
pub mod analysis;
pub mod error;
pub mod export;
pub mod labels;
pub mod progress;

pub use aggregate::{AggregateReport, RecordFilter, aggregate};
pub use error::{Error, Result};
pub use export::{SUMMARY_COLUMNS, read_summary_csv, render_summary_csv, write_summary_csv};
pub use labels::{LabelStatus, LabelTable, normalize_label_key};
pub use progress::{ProgressPoint, ProgressSeries, progress_series};
