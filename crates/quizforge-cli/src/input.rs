//! Translate what a player types into the answer text the engine expects.

use quizforge_core::question::{QuestionKind, OPTION_LETTERS};
use quizforge_core::Question;

/// Map typed input onto the engine's answer format.
///
/// Multiple-choice options are shown lettered `A`-`D` and numbered from 1;
/// a letter or any whole number is turned into the 0-based index the engine
/// checks. Anything else passes through trimmed, so unrecognized input is
/// simply marked wrong.
pub fn to_engine_answer(question: &Question, typed: &str) -> String {
    let typed = typed.trim();
    if question.kind() != QuestionKind::MultipleChoice {
        return typed.to_string();
    }

    let mut chars = typed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let upper = c.to_ascii_uppercase();
        if let Some(index) = OPTION_LETTERS.iter().position(|&l| l == upper) {
            return index.to_string();
        }
    }

    match typed.parse::<i64>().ok().and_then(|n| n.checked_sub(1)) {
        Some(index) => index.to_string(),
        None => typed.to_string(),
    }
}
