use chrono::NaiveDate;
use lessonplay_types::{Scenario, SessionRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// One charted session within a user's progress series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub round: u32,
    /// Axis label, `MM/DD (N회)`.
    pub label: String,
    pub high: u32,
    pub low: u32,
    pub input_count: usize,
}

/// Chronological session series for one (scenario, user) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSeries {
    pub scenario: Option<Scenario>,
    pub user: String,
    pub points: Vec<ProgressPoint>,
}

/// Build per-(scenario, user) progress series from summary records.
///
/// Sessions with no teacher input and sessions without a date are not
/// chartable and are always dropped. Points are ordered by (date, round).
pub fn progress_series(
    records: &[SessionRecord],
    user: Option<&str>,
    scenario: Option<Scenario>,
) -> Vec<ProgressSeries> {
    let mut groups: BTreeMap<(Option<Scenario>, String), Vec<&SessionRecord>> = BTreeMap::new();
    for record in records {
        if record.input_count == 0 || record.date.is_none() {
            continue;
        }
        if let Some(user) = user
            && record.user != user
        {
            continue;
        }
        if let Some(scenario) = scenario
            && record.scenario != Some(scenario)
        {
            continue;
        }
        groups
            .entry((record.scenario, record.user.clone()))
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .map(|((scenario, user), mut rows)| {
            rows.sort_by_key(|r| (r.date, r.round));
            ProgressSeries {
                scenario,
                user,
                points: rows.into_iter().filter_map(progress_point).collect(),
            }
        })
        .collect()
}

fn progress_point(record: &SessionRecord) -> Option<ProgressPoint> {
    let date = record.date?;
    Some(ProgressPoint {
        date,
        round: record.round,
        label: format!("{} ({}회)", date.format("%m/%d"), record.round),
        high: record.high,
        low: record.low,
        input_count: record.input_count,
    })
}
