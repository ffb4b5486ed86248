//! Views over annotated utterance tables: per-session potential trends and
//! TMSSR category breakdowns.

pub mod potential;
pub mod tmssr;
pub mod utterances;

pub use potential::{PotentialTrendRow, potential_trend};
pub use tmssr::{
    SessionTmssr, SessionTmssrPotential, SessionTmssrShares, TmssrPotentialCount,
    tmssr_breakdown, tmssr_potential_counts, tmssr_proportions,
};
pub use utterances::{UtteranceRecord, read_utterances};
