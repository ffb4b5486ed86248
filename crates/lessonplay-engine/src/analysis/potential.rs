use crate::analysis::UtteranceRecord;
use chrono::NaiveDate;
use lessonplay_types::Potential;
use serde::Serialize;
use std::collections::BTreeMap;

/// High/Low tallies for one session, in date-then-round order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PotentialTrendRow {
    pub date: NaiveDate,
    pub round: u32,
    pub label: String,
    pub high: usize,
    pub low: usize,
    /// All utterances in the session, rated or not.
    pub total: usize,
}

/// Group utterances by session and count High/Low ratings per session.
pub fn potential_trend(utterances: &[UtteranceRecord]) -> Vec<PotentialTrendRow> {
    let mut groups: BTreeMap<(NaiveDate, u32), (usize, usize, usize)> = BTreeMap::new();
    for utterance in utterances {
        let entry = groups.entry((utterance.date, utterance.round)).or_default();
        match utterance.potential {
            Some(Potential::High) => entry.0 += 1,
            Some(Potential::Low) => entry.1 += 1,
            None => {}
        }
        entry.2 += 1;
    }

    groups
        .into_iter()
        .map(|((date, round), (high, low, total))| PotentialTrendRow {
            date,
            round,
            label: format!("{date} #{round}"),
            high,
            low,
            total,
        })
        .collect()
}
