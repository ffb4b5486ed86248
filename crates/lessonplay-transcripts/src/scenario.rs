use lessonplay_types::Scenario;

const DIVISOR_PREFIX: &str = "120의 약수";
const PROPOSITION_PREFIX: &str = "선생님,";

/// Classify the scenario prompt cell by exact, case-sensitive prefix.
///
/// No trimming happens; the prompts are machine-inserted and a prompt that
/// matches neither prefix means the scenario is simply unknown.
pub fn classify_scenario(prompt: &str) -> Option<Scenario> {
    if prompt.starts_with(DIVISOR_PREFIX) {
        Some(Scenario::Divisor)
    } else if prompt.starts_with(PROPOSITION_PREFIX) {
        Some(Scenario::Proposition)
    } else {
        None
    }
}
