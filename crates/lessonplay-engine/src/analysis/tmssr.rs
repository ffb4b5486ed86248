use crate::analysis::UtteranceRecord;
use chrono::NaiveDate;
use lessonplay_types::{Potential, TmssrCategory};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Per-session TMSSR category counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionTmssr {
    pub date: NaiveDate,
    pub round: u32,
    pub label: String,
    pub counts: BTreeMap<TmssrCategory, usize>,
    pub total: usize,
}

/// Per-session TMSSR category shares of the session total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionTmssrShares {
    pub label: String,
    pub shares: BTreeMap<TmssrCategory, f64>,
    pub total: usize,
}

/// High/Low split of the rated utterances within one TMSSR category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TmssrPotentialCount {
    pub category: TmssrCategory,
    pub high: usize,
    pub low: usize,
}

/// One session's TMSSR x High/Low cross-counts.
///
/// `counts` holds the same category list for every session of one run,
/// zero-filled where a category never occurred in that session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionTmssrPotential {
    pub date: NaiveDate,
    pub round: u32,
    pub label: String,
    pub counts: Vec<TmssrPotentialCount>,
}

/// Count TMSSR categories per session. Utterances whose TMSSR cell was `-`
/// are not part of any session total.
pub fn tmssr_breakdown(utterances: &[UtteranceRecord]) -> Vec<SessionTmssr> {
    let mut groups: BTreeMap<(NaiveDate, u32), BTreeMap<TmssrCategory, usize>> = BTreeMap::new();
    for utterance in utterances {
        let Some(category) = utterance.tmssr else {
            continue;
        };
        *groups
            .entry((utterance.date, utterance.round))
            .or_default()
            .entry(category)
            .or_default() += 1;
    }

    groups
        .into_iter()
        .map(|((date, round), counts)| {
            let total = counts.values().sum();
            SessionTmssr {
                date,
                round,
                label: format!("{date} #{round}"),
                counts,
                total,
            }
        })
        .collect()
}

/// Convert per-session counts into shares of each session's total.
pub fn tmssr_proportions(sessions: &[SessionTmssr]) -> Vec<SessionTmssrShares> {
    sessions
        .iter()
        .filter(|session| session.total > 0)
        .map(|session| {
            let shares = session
                .counts
                .iter()
                .map(|(&category, &count)| (category, count as f64 / session.total as f64))
                .collect();
            SessionTmssrShares {
                label: session.label.clone(),
                shares,
                total: session.total,
            }
        })
        .collect()
}

/// Cross High/Low ratings with TMSSR categories, one row per session.
/// Only utterances carrying both annotations contribute; a session without
/// any such utterance is absent.
pub fn tmssr_potential_counts(utterances: &[UtteranceRecord]) -> Vec<SessionTmssrPotential> {
    let mut categories = BTreeSet::new();
    let mut groups: BTreeMap<(NaiveDate, u32), BTreeMap<TmssrCategory, (usize, usize)>> =
        BTreeMap::new();
    for utterance in utterances {
        let (Some(category), Some(potential)) = (utterance.tmssr, utterance.potential) else {
            continue;
        };
        categories.insert(category);
        let entry = groups
            .entry((utterance.date, utterance.round))
            .or_default()
            .entry(category)
            .or_default();
        match potential {
            Potential::High => entry.0 += 1,
            Potential::Low => entry.1 += 1,
        }
    }

    groups
        .into_iter()
        .map(|((date, round), counts)| SessionTmssrPotential {
            date,
            round,
            label: format!("{date} #{round}"),
            counts: categories
                .iter()
                .map(|&category| {
                    let (high, low) = counts.get(&category).copied().unwrap_or((0, 0));
                    TmssrPotentialCount { category, high, low }
                })
                .collect(),
        })
        .collect()
}
