//! The `quizforge kinds` command.

use anyhow::Result;

use quizforge_core::authoring::kind_labels;

pub fn execute() -> Result<()> {
    for label in kind_labels() {
        println!("{label}");
    }
    Ok(())
}
