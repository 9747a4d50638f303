//! CLI integration tests using assert_cmd.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PORTO: &str = r#"[
    {"chapter": "Chapter 1", "words": [
        {"latin": "portō, portāre, portāvī, portātum", "translation": "carry", "pos": "verb", "gender": ""}
    ]},
    {"chapter": "Chapter 2", "words": [
        {"latin": "puella, puellae", "translation": "girl", "pos": "noun", "gender": "f."}
    ]}
]"#;

fn latin_vocabulary() -> Command {
    #[allow(deprecated)]
    let mut command = Command::cargo_bin("latin-vocabulary").unwrap();
    command.env_remove("LATIN_VOCABULARY_WORDS");
    command
}

fn word_list(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("words.json");
    fs::write(&path, PORTO).unwrap();
    path
}

#[test]
fn correct_answer_with_macron_shorthand() {
    let dir = TempDir::new().unwrap();
    latin_vocabulary()
        .arg("quiz")
        .arg("--words")
        .arg(word_list(&dir))
        .args(["--chapter", "1", "--seed", "1"])
        .write_stdin("port(o)\nportAre\nport(a)vI\nportAtum\nnone\nverb\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("carry"))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Quiz Complete!"))
        .stdout(predicate::str::contains("Your Score: 1 / 1"));
}

#[test]
fn wrong_answer_explains_each_field() {
    let dir = TempDir::new().unwrap();
    latin_vocabulary()
        .arg("quiz")
        .arg("--words")
        .arg(word_list(&dir))
        .args(["--chapter", "Chapter 2"])
        .write_stdin("puella\npuellis\nm.\nnoun\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Incorrect. Check Latin Part(s): 2. Gender is wrong (Expected: f.).",
        ))
        .stdout(predicate::str::contains("Gender: f."))
        .stdout(predicate::str::contains("Your Score: 0 / 1"));
}

#[test]
fn blank_answer_asks_again_without_scoring() {
    let dir = TempDir::new().unwrap();
    latin_vocabulary()
        .arg("quiz")
        .arg("--words")
        .arg(word_list(&dir))
        .args(["--chapter", "2"])
        .write_stdin("\n\n\n\npuella\npuellae\nf.\n1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter at least one field before checking.",
        ))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Your Score: 1 / 1"));
}

#[test]
fn chapter_is_chosen_interactively() {
    let dir = TempDir::new().unwrap();
    latin_vocabulary()
        .arg("quiz")
        .arg("--words")
        .arg(word_list(&dir))
        .write_stdin("7\n2\npuella\npuellae\nf.\nnoun\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2]: Chapter 2 (1 words)"))
        .stdout(predicate::str::contains(
            "Please select a chapter before starting the quiz.",
        ))
        .stdout(predicate::str::contains("Your Score: 1 / 1"));
}

#[test]
fn unknown_chapter_fails() {
    let dir = TempDir::new().unwrap();
    latin_vocabulary()
        .arg("quiz")
        .arg("--words")
        .arg(word_list(&dir))
        .args(["--chapter", "Appendix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no chapter matches"));
}

#[test]
fn missing_word_list_fails() {
    latin_vocabulary()
        .args(["chapters", "--words", "nonexistent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("nonexistent.json"));
}

#[test]
fn chapters_are_listed() {
    let dir = TempDir::new().unwrap();
    latin_vocabulary()
        .arg("chapters")
        .arg("--words")
        .arg(word_list(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]: Chapter 1 (1 words)"))
        .stdout(predicate::str::contains("[2]: Chapter 2 (1 words)"));
}

#[test]
fn word_list_path_from_environment() {
    let dir = TempDir::new().unwrap();
    latin_vocabulary()
        .arg("chapters")
        .env("LATIN_VOCABULARY_WORDS", word_list(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapter 2"));
}

#[test]
fn convert_writes_loadable_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("words.txt");
    let output = dir.path().join("words.json");
    fs::write(
        &input,
        "CHAPTER ONE VOCABULARY\n\
         puella, puellae, f. – girl, noun\n\
         portō, portāre, portāvī, portātum (verb) - to carry\n",
    )
    .unwrap();

    latin_vocabulary()
        .arg("convert")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully converted 1 chapters."));

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"chapter\": \"Chapter 1\""));
    assert!(json.contains("\"gender\": \"f.\""));
    assert!(json.contains("portō, portāre, portāvī, portātum"));

    latin_vocabulary()
        .arg("chapters")
        .arg("--words")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]: Chapter 1 (2 words)"));
}

#[test]
fn convert_without_chapters_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("words.txt");
    let output = dir.path().join("words.json");
    fs::write(&input, "et - and, conjunction\n").unwrap();

    latin_vocabulary()
        .arg("convert")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: No chapters found in the input file."))
        .stdout(predicate::str::contains("Successfully converted").not());
    assert!(!output.exists());
}

#[test]
fn bundled_word_list_loads() {
    latin_vocabulary()
        .args(["chapters", "--words", "../words/words.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]: Chapter 1 (7 words)"))
        .stdout(predicate::str::contains("[3]: Chapter 3"));
}
