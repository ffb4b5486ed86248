use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use lessonplay_engine::{ProgressSeries, progress_series, read_summary_csv};
use lessonplay_types::Scenario;
use std::path::Path;

pub fn handle(
    summary: &Path,
    user: Option<&str>,
    scenario: Option<Scenario>,
    format: OutputFormat,
) -> Result<()> {
    if !summary.exists() {
        eprintln!(
            "Warning: no summary at {}; run 'lessonplay summarize --output {}' first",
            summary.display(),
            summary.display()
        );
        return Ok(());
    }

    let records = read_summary_csv(summary)?;
    let series = progress_series(&records, user, scenario);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
        OutputFormat::Table => print_series(&series),
    }

    Ok(())
}

fn print_series(series: &[ProgressSeries]) {
    if series.is_empty() {
        println!("No chartable sessions. Sessions need a date and at least one teacher message.");
        return;
    }

    for (index, entry) in series.iter().enumerate() {
        if index > 0 {
            println!();
        }
        let scenario = entry
            .scenario
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(no scenario)".to_string());
        output::print_header(&format!("{} - {}", entry.user, scenario));

        for point in &entry.points {
            println!(
                "  {:<12} high {:>3}  low {:>3}  input {:>3}",
                point.label, point.high, point.low, point.input_count
            );
        }
    }
}
