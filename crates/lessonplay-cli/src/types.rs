use clap::ValueEnum;
use lessonplay_types::{LessonType, Scenario};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum LessonArg {
    Rehearsal,
    TeachingMethod,
}

impl fmt::Display for LessonArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonArg::Rehearsal => write!(f, "rehearsal"),
            LessonArg::TeachingMethod => write!(f, "teaching-method"),
        }
    }
}

impl From<LessonArg> for LessonType {
    fn from(arg: LessonArg) -> Self {
        match arg {
            LessonArg::Rehearsal => LessonType::Rehearsal,
            LessonArg::TeachingMethod => LessonType::TeachingMethod,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ScenarioArg {
    Divisor,
    Proposition,
}

impl fmt::Display for ScenarioArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioArg::Divisor => write!(f, "divisor"),
            ScenarioArg::Proposition => write!(f, "proposition"),
        }
    }
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Divisor => Scenario::Divisor,
            ScenarioArg::Proposition => Scenario::Proposition,
        }
    }
}
