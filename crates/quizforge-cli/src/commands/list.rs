//! The `quizforge list` command.

use anyhow::Result;

use quizforge_core::bank::QuestionManager;

use super::sample_game;

pub fn execute(show_answers: bool) -> Result<()> {
    let mut game = sample_game()?;
    let manager = QuestionManager::new(&mut game);

    for (index, line) in manager.display_list().iter().enumerate() {
        println!("{line}");
        if show_answers {
            if let Some(question) = manager.get_question(index) {
                println!("   Answer: {}", question.correct_answer_text());
            }
        }
    }

    println!("\n{} question(s)", manager.question_count());
    Ok(())
}
