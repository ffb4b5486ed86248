use serde::{Deserialize, Serialize};
use std::fmt;

/// Potential rating attached to a single utterance by an annotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Potential {
    High,
    Low,
}

impl Potential {
    /// Exact-match parse; annotation files use "High"/"Low" verbatim and
    /// anything else (blank, "-") means unrated.
    pub fn from_label(label: &str) -> Option<Potential> {
        match label.trim() {
            "High" => Some(Potential::High),
            "Low" => Some(Potential::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Potential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Potential::High => write!(f, "High"),
            Potential::Low => write!(f, "Low"),
        }
    }
}

/// Per-session High/Low counts supplied by the external label table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighLow {
    pub high: u32,
    pub low: u32,
}
