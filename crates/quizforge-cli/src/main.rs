//! quizforge CLI: a terminal front end for the quiz engine.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quizforge_core::QuizError;

mod commands;
mod config;
mod input;

#[derive(Parser)]
#[command(name = "quizforge", version, about = "Terminal quiz player and question authoring tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the sample quiz, one answer per line on stdin
    Play {
        /// Result format: text, markdown, json
        #[arg(long)]
        format: Option<String>,

        /// Show the answer review table
        #[arg(long, conflicts_with = "no_reveal")]
        reveal: bool,

        /// Hide the answer review table
        #[arg(long)]
        no_reveal: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the sample question bank
    List {
        /// Print the correct answer under each question
        #[arg(long)]
        answers: bool,
    },

    /// Build a question from field values and try answers against it
    Author {
        /// Question kind label: "Multiple Choice", "Open-Ended", "True/False"
        #[arg(long)]
        kind: String,

        /// Question text
        #[arg(long)]
        text: String,

        /// Multiple choice option (repeat 4 times)
        #[arg(long = "option")]
        options: Vec<String>,

        /// Multiple choice: number of the correct option (1-4)
        #[arg(long)]
        correct: Option<usize>,

        /// Open-ended accepted answer (repeatable)
        #[arg(long = "answer")]
        answers: Vec<String>,

        /// True/false: whether the statement is true
        #[arg(long, value_name = "BOOL", default_value_t = false, action = ArgAction::Set)]
        truth: bool,

        /// Question category (defaults to the configured category)
        #[arg(long)]
        category: Option<String>,

        /// Answer to check against the question (repeatable)
        #[arg(long = "probe")]
        probes: Vec<String>,

        /// Print the question's authoring data as JSON
        #[arg(long)]
        json: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the question kind labels
    Kinds,

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizforge=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            format,
            reveal,
            no_reveal,
            config,
        } => {
            let reveal = match (reveal, no_reveal) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::play::execute(format, reveal, config)
        }
        Commands::List { answers } => commands::list::execute(answers),
        Commands::Author {
            kind,
            text,
            options,
            correct,
            answers,
            truth,
            category,
            probes,
            json,
            config,
        } => commands::author::execute(commands::author::AuthorArgs {
            kind,
            text,
            options,
            correct,
            answers,
            truth,
            category,
            probes,
            json,
            config,
        }),
        Commands::Kinds => commands::kinds::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        let code = exit_code(&e);
        if code == EXIT_USER_INPUT {
            eprintln!("Fix the input above and run the command again.");
        }
        process::exit(code);
    }
}

/// Exit status for input the user can correct, as opposed to other failures.
const EXIT_USER_INPUT: i32 = 2;

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<QuizError>() {
        Some(quiz_err) if quiz_err.is_user_input() => EXIT_USER_INPUT,
        _ => 1,
    }
}
