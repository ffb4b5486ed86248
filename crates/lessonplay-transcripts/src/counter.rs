use crate::schema;
use crate::table::RawTranscript;
use lessonplay_types::Scenario;

/// Teacher message counts for one transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCounts {
    /// All teacher messages in scope.
    pub input: usize,
    /// Messages whose trimmed text ends with `?`.
    pub questions: usize,
    /// `input - questions`.
    pub explanations: usize,
}

/// Count teacher messages under the scenario's slicing rules.
///
/// Proposition transcripts count every teacher row; divisor transcripts
/// count teacher rows from `DIVISOR_START_ROW` onward only, and only when
/// the table actually reaches that row. An unknown scenario, a table with
/// no message column, or a table with no teacher rows all count as zero;
/// malformed shapes never raise.
pub fn count_teacher_messages(table: &RawTranscript, scenario: Option<Scenario>) -> MessageCounts {
    let rows = teacher_rows(table, scenario);
    if rows.is_empty() || table.column_count() <= schema::dialogue::MESSAGE {
        return MessageCounts::default();
    }

    let input = rows.len();
    let questions = rows
        .iter()
        .filter(|row| {
            row.get(schema::dialogue::MESSAGE)
                .map(|message| message.trim().ends_with('?'))
                .unwrap_or(false)
        })
        .count();

    MessageCounts {
        input,
        questions,
        explanations: input - questions,
    }
}

fn teacher_rows<'a>(
    table: &'a RawTranscript,
    scenario: Option<Scenario>,
) -> Vec<&'a Vec<String>> {
    let rows = table.rows();
    let candidates: &[Vec<String>] = match scenario {
        Some(Scenario::Proposition) => rows,
        Some(Scenario::Divisor) if rows.len() > schema::dialogue::DIVISOR_START_ROW => {
            &rows[schema::dialogue::DIVISOR_START_ROW..]
        }
        _ => &[],
    };

    candidates
        .iter()
        .filter(|row| row.get(schema::dialogue::ROLE).map(String::as_str) == Some(schema::TEACHER_ROLE))
        .collect()
}
