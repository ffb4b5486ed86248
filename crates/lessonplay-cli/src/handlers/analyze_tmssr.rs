use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use lessonplay_engine::analysis::{
    SessionTmssr, SessionTmssrPotential, SessionTmssrShares, read_utterances, tmssr_breakdown,
    tmssr_potential_counts, tmssr_proportions,
};
use lessonplay_types::TmssrCategory;
use serde::Serialize;
use std::path::Path;

/// JSON payload; only the requested views are present.
#[derive(Serialize)]
struct TmssrReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    sessions: Option<Vec<SessionTmssr>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shares: Option<Vec<SessionTmssrShares>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    potential: Option<Vec<SessionTmssrPotential>>,
}

pub fn handle(file: &Path, proportions: bool, potential: bool, format: OutputFormat) -> Result<()> {
    let utterances = read_utterances(file)?;
    let sessions = tmssr_breakdown(&utterances);

    let shares = proportions.then(|| tmssr_proportions(&sessions));
    let cross = potential.then(|| tmssr_potential_counts(&utterances));
    let report = TmssrReport {
        sessions: (!proportions).then_some(sessions),
        shares,
        potential: cross,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &TmssrReport) {
    if let Some(sessions) = &report.sessions {
        print_counts(sessions);
    }
    if let Some(shares) = &report.shares {
        print_shares(shares);
    }
    if let Some(cross) = &report.potential {
        if report.sessions.is_some() || report.shares.is_some() {
            println!();
        }
        print_potential(cross);
    }
}

fn print_counts(sessions: &[SessionTmssr]) {
    if sessions.is_empty() {
        println!("No annotated utterances found.");
        return;
    }

    let mut header = format!("{:<16}", "SESSION");
    for category in TmssrCategory::ALL {
        header.push_str(&format!(" {:>12}", category.as_str().to_uppercase()));
    }
    header.push_str(&format!(" {:>6}", "TOTAL"));
    output::print_header(&header);

    for session in sessions {
        let mut line = format!("{:<16}", session.label);
        for category in TmssrCategory::ALL {
            let count = session.counts.get(&category).copied().unwrap_or(0);
            line.push_str(&format!(" {:>12}", count));
        }
        line.push_str(&format!(" {:>6}", session.total));
        println!("{}", line);
    }
}

fn print_shares(shares: &[SessionTmssrShares]) {
    if shares.is_empty() {
        println!("No annotated utterances found.");
        return;
    }

    let mut header = format!("{:<16}", "SESSION");
    for category in TmssrCategory::ALL {
        header.push_str(&format!(" {:>12}", category.as_str().to_uppercase()));
    }
    header.push_str(&format!(" {:>6}", "TOTAL"));
    output::print_header(&header);

    for session in shares {
        let mut line = format!("{:<16}", session.label);
        for category in TmssrCategory::ALL {
            let share = session.shares.get(&category).copied().unwrap_or(0.0);
            line.push_str(&format!(" {:>11.1}%", share * 100.0));
        }
        line.push_str(&format!(" {:>6}", session.total));
        println!("{}", line);
    }
}

fn print_potential(sessions: &[SessionTmssrPotential]) {
    if sessions.is_empty() {
        println!("No utterances carry both a TMSSR category and a High/Low rating.");
        return;
    }

    output::print_header(&format!(
        "{:<16} {:<14} {:>5} {:>5}",
        "SESSION", "CATEGORY", "HIGH", "LOW"
    ));
    for session in sessions {
        for row in &session.counts {
            println!(
                "{:<16} {:<14} {:>5} {:>5}",
                session.label, row.category, row.high, row.low
            );
        }
    }
}
