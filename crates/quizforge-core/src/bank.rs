//! Question bank management.
//!
//! [`QuestionManager`] is what an editing screen talks to: a thin layer over
//! [`QuizGame`]'s bank that adds the display list and turns a missing
//! question into a [`QuizError::NullQuestion`].

use crate::error::QuizError;
use crate::game::QuizGame;
use crate::question::Question;

/// Bank editing operations over a borrowed [`QuizGame`].
pub struct QuestionManager<'a> {
    game: &'a mut QuizGame,
}

impl<'a> QuestionManager<'a> {
    pub fn new(game: &'a mut QuizGame) -> Self {
        Self { game }
    }

    /// One line per question: `"<n>. [<kind>] <text>"`, numbered from 1.
    pub fn display_list(&self) -> Vec<String> {
        display_list(self.game)
    }

    /// Add a question built by the authoring form. `None` means the form
    /// produced nothing and is rejected.
    pub fn add_question(&mut self, question: Option<Question>) -> Result<(), QuizError> {
        let question = question.ok_or(QuizError::NullQuestion)?;
        self.game.add_question(question);
        Ok(())
    }

    pub fn update_question(&mut self, index: usize, question: Question) -> bool {
        self.game.update_question(index, question)
    }

    pub fn delete_question(&mut self, index: usize) -> bool {
        self.game.remove_question(index)
    }

    pub fn get_question(&self, index: usize) -> Option<&Question> {
        self.game.get_question(index)
    }

    pub fn question_count(&self) -> usize {
        self.game.total_questions()
    }

    pub fn has_questions(&self) -> bool {
        self.question_count() > 0
    }
}

/// Display lines for every question in the bank.
pub fn display_list(game: &QuizGame) -> Vec<String> {
    game.all_questions()
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. [{}] {}", i + 1, q.kind(), q.text()))
        .collect()
}
