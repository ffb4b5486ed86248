use serde::{Deserialize, Serialize};
use std::fmt;

/// TMSSR teacher-move category attached to an annotated utterance.
///
/// The category set is closed; labels outside it fold into `Unknown` so a
/// typo in an annotation file widens the Unknown bucket instead of failing
/// the whole analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TmssrCategory {
    Eliciting,
    Facilitating,
    Responding,
    Extending,
    Unknown,
}

impl TmssrCategory {
    pub const ALL: [TmssrCategory; 5] = [
        TmssrCategory::Eliciting,
        TmssrCategory::Facilitating,
        TmssrCategory::Responding,
        TmssrCategory::Extending,
        TmssrCategory::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TmssrCategory::Eliciting => "Eliciting",
            TmssrCategory::Facilitating => "Facilitating",
            TmssrCategory::Responding => "Responding",
            TmssrCategory::Extending => "Extending",
            TmssrCategory::Unknown => "Unknown",
        }
    }

    pub fn from_label(label: &str) -> TmssrCategory {
        match label.trim() {
            "Eliciting" => TmssrCategory::Eliciting,
            "Facilitating" => TmssrCategory::Facilitating,
            "Responding" => TmssrCategory::Responding,
            "Extending" => TmssrCategory::Extending,
            _ => TmssrCategory::Unknown,
        }
    }
}

impl fmt::Display for TmssrCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
