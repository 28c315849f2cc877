//! The `quizforge author` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_core::authoring::{build, extract, kind_labels, parse_kind, QuestionData};
use quizforge_core::bank::QuestionManager;
use quizforge_core::QuizGame;

use crate::config::load_config_from;
use crate::input::to_engine_answer;

/// Raw field values for one question, as typed on the command line.
pub struct AuthorArgs {
    pub kind: String,
    pub text: String,
    pub options: Vec<String>,
    /// 1-based, as shown to the author.
    pub correct: Option<usize>,
    pub answers: Vec<String>,
    pub truth: bool,
    pub category: Option<String>,
    pub probes: Vec<String>,
    pub json: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: AuthorArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;

    let kind = parse_kind(&args.kind)
        .with_context(|| format!("expected one of: {}", kind_labels().join(", ")))?;

    let data = QuestionData {
        text: args.text,
        kind,
        category: Some(args.category.unwrap_or(config.default_category)),
        options: args.options,
        correct_index: args.correct.and_then(|n| n.checked_sub(1)),
        accepted_answers: args.answers,
        true_false_answer: args.truth,
    };
    let question = build(&data).context("question rejected")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&extract(&question))?);
        return Ok(());
    }

    let mut game = QuizGame::new();
    let mut bank = QuestionManager::new(&mut game);
    bank.add_question(Some(question))?;

    for line in bank.display_list() {
        println!("{line}");
    }
    let Some(question) = bank.get_question(0) else {
        anyhow::bail!("question was not added to the bank");
    };
    println!("Category: {}", question.category());
    println!("Correct answer: {}", question.correct_answer_text());

    for probe in &args.probes {
        let verdict = if question.check_answer(&to_engine_answer(question, probe)) {
            "correct"
        } else {
            "incorrect"
        };
        println!("Probe {probe:?}: {verdict}");
    }

    Ok(())
}
