//! Built-in geography sample bank.

use crate::error::QuizError;
use crate::question::Question;

/// The five starter questions a fresh quiz ships with.
pub fn sample_questions() -> Result<Vec<Question>, QuizError> {
    Ok(vec![
        Question::multiple_choice(
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
        )?,
        Question::open_ended(
            "What is the largest country in the world by land area?",
            ["Russia", "Russian Federation"],
        )?,
        Question::true_false("The Amazon River is longer than the Nile River.", false)?,
        Question::multiple_choice(
            "Which continent has the most countries?",
            ["Asia", "Europe", "Africa", "South America"],
            2,
        )?,
        Question::open_ended(
            "What is the smallest country in the world?",
            ["Vatican City", "Vatican", "Holy See"],
        )?,
    ])
}
