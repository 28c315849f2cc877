//! Question authoring: raw form fields in, validated questions out.
//!
//! [`QuestionData`] is the uniform shape a single editing form fills in for
//! any kind of question. [`build`] validates it and constructs the matching
//! [`Question`]; [`extract`] goes the other way so an existing question can be
//! loaded back into the form.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::question::{AnswerKey, Question, QuestionKind, OPTION_COUNT};

/// Raw authoring input for one question.
///
/// Only the fields that belong to `kind` are read; the rest stay at their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionData {
    pub text: String,
    pub kind: QuestionKind,
    /// Falls back to the default category when absent or blank.
    #[serde(default)]
    pub category: Option<String>,
    /// Multiple choice: the four option texts.
    #[serde(default)]
    pub options: Vec<String>,
    /// Multiple choice: 0-based index of the correct option, `None` if the
    /// author hasn't picked one.
    #[serde(default)]
    pub correct_index: Option<usize>,
    /// Open-ended: accepted answers. Blank entries are dropped on build.
    #[serde(default)]
    pub accepted_answers: Vec<String>,
    /// True/false: whether the statement is true.
    #[serde(default)]
    pub true_false_answer: bool,
}

/// The kind labels an authoring form offers, in display order.
pub fn kind_labels() -> Vec<&'static str> {
    QuestionKind::ALL.iter().map(|kind| kind.label()).collect()
}

/// Map a kind label back to its [`QuestionKind`].
pub fn parse_kind(label: &str) -> Result<QuestionKind, QuizError> {
    label.parse()
}

/// Load an existing question into authoring form data.
pub fn extract(question: &Question) -> QuestionData {
    let mut data = QuestionData {
        text: question.text().to_string(),
        kind: question.kind(),
        category: Some(question.category().to_string()),
        ..QuestionData::default()
    };

    match question.answer_key() {
        AnswerKey::MultipleChoice {
            options,
            correct_index,
        } => {
            data.options = options.clone();
            data.correct_index = Some(*correct_index);
        }
        AnswerKey::OpenEnded { accepted_answers } => {
            data.accepted_answers = accepted_answers.clone();
        }
        AnswerKey::TrueFalse { correct_answer } => {
            data.true_false_answer = *correct_answer;
        }
    }

    data
}

/// Check authoring data, stopping at the first problem found.
pub fn validate(data: &QuestionData) -> Result<(), QuizError> {
    if data.text.trim().is_empty() {
        return Err(invalid("Question text cannot be empty"));
    }

    match data.kind {
        QuestionKind::MultipleChoice => {
            if data.options.len() != OPTION_COUNT {
                return Err(invalid(&format!(
                    "Multiple choice questions must have exactly {OPTION_COUNT} options"
                )));
            }
            if data.options.iter().any(|o| o.trim().is_empty()) {
                return Err(invalid("All options must be filled"));
            }
            match data.correct_index {
                Some(i) if i < OPTION_COUNT => {}
                _ => return Err(invalid("Please select the correct answer")),
            }
        }
        QuestionKind::OpenEnded => {
            if data.accepted_answers.iter().all(|a| a.trim().is_empty()) {
                return Err(invalid("Please enter at least one correct answer"));
            }
        }
        QuestionKind::TrueFalse => {}
    }

    Ok(())
}

/// Validate authoring data and build the question it describes.
pub fn build(data: &QuestionData) -> Result<Question, QuizError> {
    validate(data)?;

    let question = match data.kind {
        QuestionKind::MultipleChoice => Question::multiple_choice(
            data.text.clone(),
            data.options.iter().cloned(),
            data.correct_index.unwrap_or_default(),
        )?,
        QuestionKind::OpenEnded => Question::open_ended(
            data.text.clone(),
            data.accepted_answers
                .iter()
                .filter(|a| !a.trim().is_empty())
                .cloned(),
        )?,
        QuestionKind::TrueFalse => Question::true_false(data.text.clone(), data.true_false_answer)?,
    };

    Ok(match &data.category {
        Some(category) => question.with_category(category.clone()),
        None => question,
    })
}

fn invalid(message: &str) -> QuizError {
    QuizError::Validation(message.to_string())
}
