use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use lessonplay_engine::{LabelStatus, RecordFilter, aggregate, write_summary_csv};
use lessonplay_types::SessionRecord;
use std::path::Path;

pub fn handle(
    data_dir: &Path,
    labels: Option<&Path>,
    output: Option<&Path>,
    filter: &RecordFilter,
    format: OutputFormat,
) -> Result<()> {
    let report = aggregate(data_dir, labels)?;

    for skipped in &report.skipped {
        eprintln!(
            "Warning: skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }
    if let LabelStatus::Unavailable { path, reason } = &report.labels {
        eprintln!(
            "Warning: High/Low labels not applied from {}: {}",
            path.display(),
            reason
        );
    }

    let records = filter.apply(&report.records);

    if let Some(path) = output {
        write_summary_csv(&records, path)?;
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Table => {
            print_table(&records);
            if let Some(path) = output {
                println!();
                println!("Wrote {} sessions to {}", records.len(), path.display());
            }
        }
    }

    Ok(())
}

fn print_table(records: &[SessionRecord]) {
    if records.is_empty() {
        println!("No sessions matched. Check the data directory, or pass --include-empty.");
        return;
    }

    output::print_header(&format!(
        "{:<14} {:<10} {:<4} {:<8} {:<12} {:>5} {:>5} {:>9} {:>12} {:>4} {:>3} {:>8}",
        "LESSON",
        "DATE",
        "TIME",
        "SCENARIO",
        "USER",
        "ROUND",
        "INPUT",
        "QUESTIONS",
        "EXPLANATIONS",
        "HIGH",
        "LOW",
        "FEEDBACK"
    ));

    for record in records {
        println!(
            "{:<14} {:<10} {:<4} {:<8} {:<12} {:>5} {:>5} {:>9} {:>12} {:>4} {:>3} {:>8}",
            record.lesson,
            record.date_code().unwrap_or_default(),
            record.time_code().unwrap_or_default(),
            record.scenario.map(|s| s.to_string()).unwrap_or_default(),
            record.user,
            record.round,
            record.input_count,
            record.question_count,
            record.explanation_count,
            record.high,
            record.low,
            if record.has_feedback { "1" } else { "0" }
        );
    }

    println!();
    println!("{} sessions", records.len());
}
