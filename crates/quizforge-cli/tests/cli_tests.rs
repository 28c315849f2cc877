//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `quizforge` command isolated from any real config on this machine.
fn quizforge(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizforge").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("QUIZFORGE_CATEGORY")
        .env_remove("QUIZFORGE_REVEAL_ANSWERS")
        .env_remove("RUST_LOG");
    cmd
}

const ALL_CORRECT: &str = "C\nRussia\nfalse\n3\nVatican\n";

#[test]
fn play_perfect_score() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("play")
        .write_stdin(ALL_CORRECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1/5 [Multiple Choice]"))
        .stdout(predicate::str::contains("Quiz complete!"))
        .stdout(predicate::str::contains("Score: 5/5 (100.0%)"))
        .stdout(predicate::str::contains("C. Paris"))
        .stdout(predicate::str::contains("Correct answer"));
}

#[test]
fn play_all_wrong() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("play")
        .write_stdin("A\nChina\nyes\nB\nMonaco\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/5 (0.0%)"))
        .stdout(predicate::str::contains("A. London"))
        .stdout(predicate::str::contains("Russia / Russian Federation"));
}

#[test]
fn play_without_reveal_hides_review() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("play")
        .arg("--no-reveal")
        .write_stdin(ALL_CORRECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 5/5"))
        .stdout(predicate::str::contains("Correct answer").not());
}

#[test]
fn play_reveal_setting_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quizforge.toml"), "reveal_answers = false\n").unwrap();
    quizforge(&dir)
        .arg("play")
        .write_stdin(ALL_CORRECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct answer").not());

    quizforge(&dir)
        .arg("play")
        .arg("--reveal")
        .write_stdin(ALL_CORRECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct answer"));
}

#[test]
fn play_json_output() {
    let dir = TempDir::new().unwrap();
    let output = quizforge(&dir)
        .arg("play")
        .arg("--format")
        .arg("json")
        .write_stdin("C\nUSA\nfalse\n3\nVatican\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["total_questions"], 5);
    assert_eq!(result["correct_answers"], 4);
    assert_eq!(result["answers"][1], false);
    assert_eq!(result["responses"][0], "2");
}

#[test]
fn play_markdown_output() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("play")
        .arg("--format")
        .arg("markdown")
        .write_stdin(ALL_CORRECT)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Score: 5/5 (100.0%)**"))
        .stdout(predicate::str::contains("| # | Question |"));
}

#[test]
fn play_unknown_format() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("play")
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn play_input_ends_early() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("play")
        .write_stdin("C\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 5 answered"));
}

#[test]
fn list_sample_bank() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. [Multiple Choice] What is the capital of France?",
        ))
        .stdout(predicate::str::contains(
            "3. [True/False] The Amazon River is longer than the Nile River.",
        ))
        .stdout(predicate::str::contains("5 question(s)"))
        .stdout(predicate::str::contains("Answer:").not());
}

#[test]
fn list_with_answers() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("list")
        .arg("--answers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer: 3. Paris"))
        .stdout(predicate::str::contains("Answer: Vatican City / Vatican / Holy See"));
}

#[test]
fn kinds_lists_labels() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("kinds")
        .assert()
        .success()
        .stdout("Multiple Choice\nOpen-Ended\nTrue/False\n");
}

#[test]
fn author_multiple_choice_with_probes() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .args(["author", "--kind", "Multiple Choice"])
        .args(["--text", "Which river is the longest?"])
        .args(["--option", "Amazon", "--option", "Nile"])
        .args(["--option", "Yangtze", "--option", "Mississippi"])
        .args(["--correct", "2"])
        .args(["--probe", "B", "--probe", "a", "--probe", "Nile"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. [Multiple Choice] Which river is the longest?",
        ))
        .stdout(predicate::str::contains("Correct answer: 2. Nile"))
        .stdout(predicate::str::contains("Probe \"B\": correct"))
        .stdout(predicate::str::contains("Probe \"a\": incorrect"))
        .stdout(predicate::str::contains("Probe \"Nile\": incorrect"));
}

#[test]
fn author_open_ended_drops_blank_answers() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .args(["author", "--kind", "Open-Ended"])
        .args(["--text", "What is the capital of Australia?"])
        .args(["--answer", "", "--answer", "Canberra"])
        .args(["--probe", "  CANBERRA. "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct answer: Canberra\n"))
        .stdout(predicate::str::contains("Probe \"  CANBERRA. \": correct"));
}

#[test]
fn author_uses_configured_category() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("quizforge.toml"),
        "default_category = \"Rivers\"\n",
    )
    .unwrap();
    quizforge(&dir)
        .args(["author", "--kind", "True/False"])
        .args(["--text", "The Nile flows north.", "--truth", "true"])
        .args(["--probe", "yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Rivers"))
        .stdout(predicate::str::contains("Correct answer: True"))
        .stdout(predicate::str::contains("Probe \"yes\": correct"));
}

#[test]
fn author_json_output() {
    let dir = TempDir::new().unwrap();
    let output = quizforge(&dir)
        .args(["author", "--kind", "True/False"])
        .args(["--text", "Mount Everest is in Nepal.", "--truth", "true"])
        .args(["--category", "Mountains", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let data: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(data["kind"], "true_false");
    assert_eq!(data["category"], "Mountains");
    assert_eq!(data["true_false_answer"], true);
    assert_eq!(data["options"], serde_json::json!([]));
}

#[test]
fn author_rejects_three_options() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .args(["author", "--kind", "Multiple Choice", "--text", "Pick one"])
        .args(["--option", "a", "--option", "b", "--option", "c"])
        .args(["--correct", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("question rejected"))
        .stderr(predicate::str::contains("exactly 4 options"));
}

#[test]
fn author_requires_correct_option() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .args(["author", "--kind", "Multiple Choice", "--text", "Pick one"])
        .args(["--option", "a", "--option", "b", "--option", "c", "--option", "d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select the correct answer"));
}

#[test]
fn author_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .args(["author", "--kind", "Essay", "--text", "Discuss."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid question type: Essay"))
        .stderr(predicate::str::contains("Fix the input above"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    quizforge(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizforge.toml"));
    assert!(dir.path().join("quizforge.toml").exists());

    quizforge(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .args(["play", "--config", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file not found"))
        .stderr(predicate::str::contains("Fix the input above").not());
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal quiz player"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    quizforge(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizforge"));
}
