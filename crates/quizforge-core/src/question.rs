//! Question model.
//!
//! A [`Question`] is a prompt plus an [`AnswerKey`] that decides how answers
//! are checked and how the correct answer is shown. The set of kinds is
//! closed: adding one means touching answer checking, answer formatting, and
//! the authoring validator together, and the exhaustive matches below make
//! the compiler point at each of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Category assigned to questions that don't name one.
pub const DEFAULT_CATEGORY: &str = "Geography";

/// Number of options every multiple-choice question carries.
pub const OPTION_COUNT: usize = 4;

/// Letters used when showing multiple-choice options to a player.
pub const OPTION_LETTERS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

const TRUE_TOKENS: [&str; 4] = ["true", "t", "yes", "y"];
const FALSE_TOKENS: [&str; 4] = ["false", "f", "no", "n"];

/// The fixed set of question kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    MultipleChoice,
    OpenEnded,
    TrueFalse,
}

impl QuestionKind {
    /// Every kind, in display order.
    pub const ALL: [QuestionKind; 3] = [
        QuestionKind::MultipleChoice,
        QuestionKind::OpenEnded,
        QuestionKind::TrueFalse,
    ];

    /// Display label, also used to round-trip through authoring forms.
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Multiple Choice",
            QuestionKind::OpenEnded => "Open-Ended",
            QuestionKind::TrueFalse => "True/False",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| QuizError::InvalidQuestionType(s.to_string()))
    }
}

/// What counts as a correct answer, per kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerKey {
    /// Exactly [`OPTION_COUNT`] options; `correct_index` always points at one.
    MultipleChoice {
        options: Vec<String>,
        correct_index: usize,
    },
    /// At least one accepted answer, compared after normalization.
    OpenEnded { accepted_answers: Vec<String> },
    TrueFalse { correct_answer: bool },
}

/// A single quiz question.
///
/// Fields are private; the constructors enforce the invariants and accessors
/// only hand out shared borrows, so nothing outside can change a question
/// once it exists. Editing a bank entry means building a new question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    text: String,
    category: String,
    #[serde(flatten)]
    answer: AnswerKey,
}

impl Question {
    /// Build a multiple-choice question from exactly four options.
    pub fn multiple_choice<I, S>(
        text: impl Into<String>,
        options: I,
        correct_index: usize,
    ) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.len() != OPTION_COUNT {
            return Err(QuizError::InvalidQuestion(format!(
                "must provide exactly {OPTION_COUNT} options, got {}",
                options.len()
            )));
        }
        if correct_index >= options.len() {
            return Err(QuizError::InvalidQuestion(format!(
                "correct option index {correct_index} is out of range"
            )));
        }
        Self::new(
            text.into(),
            AnswerKey::MultipleChoice {
                options,
                correct_index,
            },
        )
    }

    /// Build an open-ended question accepting any of `accepted_answers`.
    pub fn open_ended<I, S>(text: impl Into<String>, accepted_answers: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let accepted_answers: Vec<String> =
            accepted_answers.into_iter().map(Into::into).collect();
        if accepted_answers.is_empty() {
            return Err(QuizError::InvalidQuestion(
                "must provide at least one correct answer".into(),
            ));
        }
        Self::new(text.into(), AnswerKey::OpenEnded { accepted_answers })
    }

    /// Build a true/false question about a statement.
    pub fn true_false(text: impl Into<String>, correct_answer: bool) -> Result<Self, QuizError> {
        Self::new(text.into(), AnswerKey::TrueFalse { correct_answer })
    }

    fn new(text: String, answer: AnswerKey) -> Result<Self, QuizError> {
        if text.trim().is_empty() {
            return Err(QuizError::InvalidQuestion(
                "question text cannot be empty".into(),
            ));
        }
        Ok(Self {
            text,
            category: DEFAULT_CATEGORY.to_string(),
            answer,
        })
    }

    /// Replace the category. A blank category falls back to [`DEFAULT_CATEGORY`].
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category
        };
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer
    }

    pub fn kind(&self) -> QuestionKind {
        match self.answer {
            AnswerKey::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            AnswerKey::OpenEnded { .. } => QuestionKind::OpenEnded,
            AnswerKey::TrueFalse { .. } => QuestionKind::TrueFalse,
        }
    }

    /// The answer options, for multiple-choice questions.
    pub fn options(&self) -> Option<&[String]> {
        match &self.answer {
            AnswerKey::MultipleChoice { options, .. } => Some(options),
            _ => None,
        }
    }

    /// The accepted answers, for open-ended questions.
    pub fn accepted_answers(&self) -> Option<&[String]> {
        match &self.answer {
            AnswerKey::OpenEnded { accepted_answers } => Some(accepted_answers),
            _ => None,
        }
    }

    /// Check a raw answer as typed or selected by the player.
    ///
    /// Malformed input is never an error, just a wrong answer:
    /// - multiple choice expects the 0-based option index as an integer
    /// - open-ended compares normalized text against every accepted answer
    /// - true/false takes `true`/`false` or `t`, `yes`, `y` / `f`, `no`, `n`
    pub fn check_answer(&self, raw: &str) -> bool {
        match &self.answer {
            AnswerKey::MultipleChoice { correct_index, .. } => raw
                .trim()
                .parse::<i64>()
                .is_ok_and(|selected| selected == *correct_index as i64),
            AnswerKey::OpenEnded { accepted_answers } => {
                if raw.trim().is_empty() {
                    return false;
                }
                let given = normalize_answer(raw);
                accepted_answers
                    .iter()
                    .any(|accepted| normalize_answer(accepted) == given)
            }
            AnswerKey::TrueFalse { correct_answer } => match parse_true_false(raw) {
                Some(given) => given == *correct_answer,
                None => false,
            },
        }
    }

    /// The correct answer formatted for feedback screens.
    pub fn correct_answer_text(&self) -> String {
        match &self.answer {
            AnswerKey::MultipleChoice {
                options,
                correct_index,
            } => format!("{}. {}", correct_index + 1, options[*correct_index]),
            AnswerKey::OpenEnded { accepted_answers } => accepted_answers.join(" / "),
            AnswerKey::TrueFalse { correct_answer } => {
                let label = if *correct_answer { "True" } else { "False" };
                label.to_string()
            }
        }
    }

    /// A player's raw response formatted for an answer review.
    ///
    /// Multiple-choice indices are shown as the lettered option they picked;
    /// anything else is shown as given.
    pub fn describe_response(&self, raw: &str) -> String {
        if let AnswerKey::MultipleChoice { options, .. } = &self.answer {
            if let Some((letter, option)) = raw
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|i| Some((OPTION_LETTERS.get(i)?, options.get(i)?)))
            {
                return format!("{letter}. {option}");
            }
        }
        raw.to_string()
    }
}

/// Normalize an open-ended answer before comparison.
///
/// Trims the ends, drops periods, commas and apostrophes, turns hyphens into
/// spaces, and lower-cases. Other punctuation and inner whitespace runs are
/// left alone.
pub fn normalize_answer(answer: &str) -> String {
    answer
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '\''))
        .map(|c| if c == '-' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

fn parse_true_false(raw: &str) -> Option<bool> {
    if let Ok(value) = raw.parse::<bool>() {
        return Some(value);
    }
    let normalized = raw.trim().to_lowercase();
    if TRUE_TOKENS.contains(&normalized.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}
