//! Quiz session state machine.
//!
//! A [`QuizGame`] owns the question bank and at most one running session.
//! `start_game` moves it from [`SessionState::Idle`] to
//! [`SessionState::InProgress`]; answering the last question or calling
//! `reset_game` moves it back. There is no pause.

use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, MonotonicClock, Stopwatch};
use crate::question::Question;
use crate::report::GameResult;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    InProgress,
}

/// One submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Response {
    correct: bool,
    answer: String,
}

/// The question bank plus the state of the current session.
pub struct QuizGame {
    bank: Vec<Question>,
    clock: Arc<dyn Clock>,
    stopwatch: Stopwatch,
    state: SessionState,
    /// Snapshot of the bank taken at `start_game`.
    round: Vec<Question>,
    current_index: usize,
    responses: Vec<Response>,
}

impl Default for QuizGame {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizGame {
    /// Create an empty game timed by the system's monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(MonotonicClock::new()))
    }

    /// Create an empty game timed by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            bank: Vec::new(),
            clock,
            stopwatch: Stopwatch::new(),
            state: SessionState::Idle,
            round: Vec::new(),
            current_index: 0,
            responses: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Bank
    // -----------------------------------------------------------------------

    /// Append a question to the bank. A running session keeps the questions
    /// it started with.
    pub fn add_question(&mut self, question: Question) {
        self.bank.push(question);
    }

    /// Remove the question at `index`. Returns `false` if out of range.
    pub fn remove_question(&mut self, index: usize) -> bool {
        if index >= self.bank.len() {
            tracing::warn!("remove ignored, no question at index {index}");
            return false;
        }
        self.bank.remove(index);
        true
    }

    /// Replace the question at `index`. Returns `false` if out of range.
    pub fn update_question(&mut self, index: usize, question: Question) -> bool {
        match self.bank.get_mut(index) {
            Some(slot) => {
                *slot = question;
                true
            }
            None => {
                tracing::warn!("update ignored, no question at index {index}");
                false
            }
        }
    }

    pub fn get_question(&self, index: usize) -> Option<&Question> {
        self.bank.get(index)
    }

    /// A copy of the whole bank.
    pub fn all_questions(&self) -> Vec<Question> {
        self.bank.clone()
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    /// Empty the bank and drop any session.
    pub fn clear_all_questions(&mut self) {
        self.bank.clear();
        self.reset_game();
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == SessionState::InProgress
    }

    /// 0-based position of the next question to answer.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Time measured for the current or last session.
    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed(self.clock.as_ref())
    }

    /// Start a session over the current bank.
    ///
    /// Returns `false` and stays idle if the bank is empty. Starting while a
    /// session is running discards it and starts over.
    pub fn start_game(&mut self) -> bool {
        if self.bank.is_empty() {
            tracing::warn!("cannot start a quiz with an empty question bank");
            return false;
        }

        self.clear_session();
        self.round = self.bank.clone();
        self.stopwatch.start(self.clock.as_ref());
        self.state = SessionState::InProgress;
        tracing::debug!("quiz started with {} questions", self.round.len());
        true
    }

    /// The question waiting for an answer, while a session is running.
    pub fn current_question(&self) -> Option<&Question> {
        if !self.is_in_progress() {
            return None;
        }
        self.round.get(self.current_index)
    }

    pub fn has_next_question(&self) -> bool {
        self.current_question().is_some()
    }

    /// Record an answer to the current question and move on.
    ///
    /// Returns `false` without doing anything if no session is running.
    /// Answering the last question stops the clock and ends the session.
    pub fn submit_answer(&mut self, answer: &str) -> bool {
        let Some(question) = self.current_question() else {
            tracing::warn!("answer ignored, no quiz in progress");
            return false;
        };

        let correct = question.check_answer(answer);
        tracing::debug!(
            question = self.current_index + 1,
            correct,
            "answer submitted"
        );
        self.responses.push(Response {
            correct,
            answer: answer.to_string(),
        });
        self.current_index += 1;

        if self.current_index >= self.round.len() {
            self.stopwatch.stop(self.clock.as_ref());
            self.state = SessionState::Idle;
            tracing::info!(
                "quiz complete: {}/{} correct in {:.1}s",
                self.correct_count(),
                self.round.len(),
                self.elapsed().as_secs_f64()
            );
        }

        true
    }

    /// The score report, once no session is running.
    ///
    /// Before any session has been played this reports zero questions.
    pub fn result(&self) -> Option<GameResult> {
        if self.is_in_progress() {
            return None;
        }

        Some(GameResult {
            total_questions: self.round.len(),
            correct_answers: self.correct_count(),
            elapsed_ms: self.elapsed().as_millis() as u64,
            questions: self.round.clone(),
            answers: self.responses.iter().map(|r| r.correct).collect(),
            responses: self.responses.iter().map(|r| r.answer.clone()).collect(),
        })
    }

    /// Drop the session and return to idle. The bank is untouched.
    pub fn reset_game(&mut self) {
        self.clear_session();
    }

    fn clear_session(&mut self) {
        self.stopwatch.reset();
        self.round.clear();
        self.current_index = 0;
        self.responses.clear();
        self.state = SessionState::Idle;
    }

    fn correct_count(&self) -> usize {
        self.responses.iter().filter(|r| r.correct).count()
    }
}
