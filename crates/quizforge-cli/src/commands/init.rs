//! The `quizforge init` command.

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("quizforge.toml");
    if path.exists() {
        println!("quizforge.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG).context("failed to write quizforge.toml")?;
        println!("Created quizforge.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizforge.toml to taste");
    println!("  2. Run: quizforge list --answers");
    println!("  3. Run: quizforge play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizforge configuration

# Category for authored questions that don't name one.
default_category = "Geography"

# Show the answer review table after a quiz.
reveal_answers = true

# Result format for `quizforge play`: text, markdown, json
format = "text"
"#;
