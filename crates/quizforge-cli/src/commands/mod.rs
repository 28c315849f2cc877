//! Subcommand implementations.

pub mod author;
pub mod init;
pub mod kinds;
pub mod list;
pub mod play;

use anyhow::Result;

use quizforge_core::samples::sample_questions;
use quizforge_core::QuizGame;

/// A fresh game holding the built-in sample bank.
fn sample_game() -> Result<QuizGame> {
    let mut game = QuizGame::new();
    for question in sample_questions()? {
        game.add_question(question);
    }
    Ok(game)
}
