//! Quiz result types and answer review rendering.

use std::time::Duration;

use serde::Serialize;

use crate::question::Question;

/// Final score report for a completed session.
///
/// `questions`, `answers` and `responses` are index-aligned by submission
/// order. All of them are copies; changing them never touches the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResult {
    /// Number of questions in the session.
    pub total_questions: usize,
    /// Number of answers judged correct.
    pub correct_answers: usize,
    /// Time the session ran, in milliseconds.
    pub elapsed_ms: u64,
    /// The questions of the session, in play order.
    pub questions: Vec<Question>,
    /// Whether each submitted answer was correct.
    pub answers: Vec<bool>,
    /// The raw text of each submitted answer.
    pub responses: Vec<String>,
}

/// One row of the post-quiz answer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerReview {
    /// 1-based question number.
    pub number: usize,
    pub question: String,
    pub correct_answer: String,
    pub response: String,
    pub correct: bool,
}

impl GameResult {
    pub fn incorrect_answers(&self) -> usize {
        self.total_questions.saturating_sub(self.correct_answers)
    }

    /// Percentage of correct answers; 0 when there were no questions.
    pub fn score_percentage(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.total_questions as f64 * 100.0
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed().as_secs_f64() / 60.0
    }

    /// One-line score summary, e.g. `Score: 2/5 (40.0%)`.
    pub fn summary(&self) -> String {
        format!(
            "Score: {}/{} ({:.1}%)",
            self.correct_answers,
            self.total_questions,
            self.score_percentage()
        )
    }

    /// Per-question review rows for every answered question.
    pub fn review(&self) -> Vec<AnswerReview> {
        self.questions
            .iter()
            .zip(self.answers.iter().zip(&self.responses))
            .enumerate()
            .map(|(i, (question, (&correct, response)))| AnswerReview {
                number: i + 1,
                question: question.text().to_string(),
                correct_answer: question.correct_answer_text(),
                response: question.describe_response(response),
                correct,
            })
            .collect()
    }

    /// Format the result as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**{}** in {:.1} minutes\n\n",
            self.summary(),
            self.elapsed_minutes()
        ));

        let review = self.review();
        if !review.is_empty() {
            md.push_str("| # | Question | Correct answer | Your answer | Result |\n");
            md.push_str("|---|----------|----------------|-------------|--------|\n");
            for row in &review {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    row.number,
                    escape_cell(&row.question),
                    escape_cell(&row.correct_answer),
                    escape_cell(&row.response),
                    if row.correct { "✓" } else { "✗" }
                ));
            }
        }

        md
    }
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
