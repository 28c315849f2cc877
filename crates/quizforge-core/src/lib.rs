//! quizforge-core: question model, quiz session engine, and scoring.
//!
//! This crate owns every piece of quiz logic: the question variants and their
//! answer-checking rules, the authoring pipeline that turns raw form input into
//! questions, and the single-player session state machine that produces a
//! [`report::GameResult`]. Presentation layers call into it and render the
//! results themselves.

pub mod authoring;
pub mod bank;
pub mod clock;
pub mod error;
pub mod game;
pub mod question;
pub mod report;
pub mod samples;

pub use error::QuizError;
pub use game::QuizGame;
pub use question::{Question, QuestionKind};
