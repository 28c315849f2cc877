//! Quiz error types.
//!
//! These errors cover structural failures only: building a question from bad
//! input, failing authoring validation, or naming an unknown question kind.
//! Routine UI conditions (an out-of-range selection, submitting with no
//! session running) are reported through `bool` / `Option` returns instead.

use thiserror::Error;

/// Errors raised while constructing or authoring questions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A question was constructed with fields that break its invariants.
    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    /// Authoring input failed validation.
    #[error("{0}")]
    Validation(String),

    /// A kind label did not match any known question kind.
    #[error("invalid question type: {0}")]
    InvalidQuestionType(String),

    /// No question was supplied where one was required.
    #[error("no question provided")]
    NullQuestion,
}

impl QuizError {
    /// Returns `true` if the error came from authoring input the user can fix
    /// and resubmit.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            QuizError::Validation(_) | QuizError::InvalidQuestionType(_)
        )
    }
}
