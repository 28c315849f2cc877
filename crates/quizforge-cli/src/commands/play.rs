//! The `quizforge play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_core::question::{QuestionKind, OPTION_LETTERS};
use quizforge_core::report::GameResult;
use quizforge_core::{Question, QuizGame};

use super::sample_game;
use crate::config::{load_config_from, OutputFormat};
use crate::input::to_engine_answer;

pub fn execute(
    format: Option<String>,
    reveal: Option<bool>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = match format {
        Some(f) => f.parse::<OutputFormat>().map_err(|e| anyhow::anyhow!(e))?,
        None => config.format,
    };
    let reveal = reveal.unwrap_or(config.reveal_answers);

    let mut game = sample_game()?;

    // Keep stdout clean for the JSON document.
    let mut prompts: Box<dyn Write> = if format == OutputFormat::Json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let result = run_session(&mut game, io::stdin().lock(), &mut prompts)?;
    drop(prompts);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Markdown => {
            println!("{}", result.to_markdown());
        }
        OutputFormat::Text => print_text(&result, reveal),
    }

    Ok(())
}

/// Play one session, reading one answer per line from `input`.
///
/// Running out of input mid-quiz abandons the session.
fn run_session(
    game: &mut QuizGame,
    input: impl BufRead,
    out: &mut dyn Write,
) -> Result<GameResult> {
    anyhow::ensure!(game.start_game(), "the question bank is empty");

    let total = game.total_questions();
    let mut lines = input.lines();

    while let Some(question) = game.current_question().cloned() {
        write_question(out, game.current_index() + 1, total, &question)?;

        let Some(line) = lines.next() else {
            let answered = game.current_index();
            game.reset_game();
            anyhow::bail!(
                "input ended before the quiz was finished ({answered} of {total} answered)"
            );
        };
        let line = line.context("failed to read answer")?;

        game.submit_answer(&to_engine_answer(&question, &line));
    }

    game.result().context("quiz did not finish")
}

fn write_question(
    out: &mut dyn Write,
    number: usize,
    total: usize,
    question: &Question,
) -> Result<()> {
    writeln!(out, "\nQuestion {number}/{total} [{}]", question.kind())?;
    writeln!(out, "{}", question.text())?;

    let hint = match question.kind() {
        QuestionKind::MultipleChoice => {
            let options = question.options().unwrap_or_default();
            for (letter, option) in OPTION_LETTERS.iter().zip(options) {
                writeln!(out, "  {letter}. {option}")?;
            }
            "A-D"
        }
        QuestionKind::OpenEnded => "type your answer",
        QuestionKind::TrueFalse => "true/false",
    };
    write!(out, "Your answer ({hint}): ")?;
    out.flush()?;
    Ok(())
}

fn print_text(result: &GameResult, reveal: bool) {
    use comfy_table::{Cell, Table};

    println!("\n\nQuiz complete!");
    println!("{}", result.summary());
    println!("Time: {:.1} minutes", result.elapsed_minutes());

    if !reveal {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Correct answer", "Your answer", ""]);
    for row in result.review() {
        table.add_row(vec![
            Cell::new(row.number),
            Cell::new(&row.question),
            Cell::new(&row.correct_answer),
            Cell::new(&row.response),
            Cell::new(if row.correct { "✓" } else { "✗" }),
        ]);
    }
    println!("\n{table}");
}
