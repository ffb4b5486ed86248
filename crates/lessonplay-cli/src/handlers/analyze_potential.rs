use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use lessonplay_engine::analysis::{PotentialTrendRow, potential_trend, read_utterances};
use std::path::Path;

pub fn handle(file: &Path, format: OutputFormat) -> Result<()> {
    let utterances = read_utterances(file)?;
    let rows = potential_trend(&utterances);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => print_table(&rows),
    }

    Ok(())
}

fn print_table(rows: &[PotentialTrendRow]) {
    if rows.is_empty() {
        println!("No annotated utterances found.");
        return;
    }

    output::print_header(&format!(
        "{:<16} {:>5} {:>5} {:>7} {:>6}",
        "SESSION", "HIGH", "LOW", "UNRATED", "TOTAL"
    ));

    for row in rows {
        println!(
            "{:<16} {:>5} {:>5} {:>7} {:>6}",
            row.label,
            row.high,
            row.low,
            row.total - row.high - row.low,
            row.total
        );
    }
}
