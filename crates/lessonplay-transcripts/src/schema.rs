//! Fixed cell positions in session transcript tables.
//!
//! Transcripts are headerless and positional. Two layouts coexist in every
//! file and are kept as separate maps: `meta` names single cells holding
//! session metadata, `dialogue` names the columns of the per-utterance rows.
//! All positions are 0-based `(row, column)` or column offsets.

/// Single metadata cells.
pub mod meta {
    /// Student (user) name.
    pub const USER: (usize, usize) = (1, 0);
    /// Raw Korean-locale datetime string.
    pub const TIMESTAMP: (usize, usize) = (1, 1);
    /// Scenario prompt text; classified by prefix.
    pub const SCENARIO_PROMPT: (usize, usize) = (1, 3);
    /// Header cell that carries the AI feedback marker when present.
    pub const FEEDBACK_MARKER: (usize, usize) = (0, 4);
}

/// Columns of the dialogue rows.
pub mod dialogue {
    /// Speaker role.
    pub const ROLE: usize = 2;
    /// Utterance text.
    pub const MESSAGE: usize = 3;
    /// First dialogue row of divisor-scenario transcripts; earlier rows
    /// repeat the task setup and must not be counted.
    pub const DIVISOR_START_ROW: usize = 8;
}

/// Role value marking a teacher utterance.
pub const TEACHER_ROLE: &str = "교사";

/// Substring of the feedback marker cell that flags AI feedback.
pub const FEEDBACK_MARK: &str = "AI 피드백";
