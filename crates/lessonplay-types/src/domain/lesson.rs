use serde::{Deserialize, Serialize};
use std::fmt;

/// Lesson category, derived from the top-level folder a transcript lives in.
///
/// The variant order matches the lexicographic order of the folder names so
/// that sorting records by lesson matches sorting the rendered labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LessonType {
    Rehearsal,
    TeachingMethod,
}

impl LessonType {
    pub const ALL: [LessonType; 2] = [LessonType::Rehearsal, LessonType::TeachingMethod];

    /// Folder name under the data root; doubles as the summary table label.
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonType::Rehearsal => "Rehearsal",
            LessonType::TeachingMethod => "TeachingMethod",
        }
    }

    pub fn from_dir_name(name: &str) -> Option<LessonType> {
        match name {
            "Rehearsal" => Some(LessonType::Rehearsal),
            "TeachingMethod" => Some(LessonType::TeachingMethod),
            _ => None,
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Teaching scenario detected from the prompt cell of a transcript.
///
/// Only two scenarios exist in the corpus; anything else is treated as
/// absent rather than invented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// "120의 약수" divisor exploration scenario.
    #[serde(rename = "약수")]
    Divisor,
    /// "선생님, ..." proposition discussion scenario.
    #[serde(rename = "명제")]
    Proposition,
}

impl Scenario {
    /// Label used in the summary table and exported CSV.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Divisor => "약수",
            Scenario::Proposition => "명제",
        }
    }

    pub fn from_label(label: &str) -> Option<Scenario> {
        match label {
            "약수" => Some(Scenario::Divisor),
            "명제" => Some(Scenario::Proposition),
            _ => None,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
