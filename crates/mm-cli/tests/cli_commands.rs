#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A small custom pack with two items and two questions.
fn tiny_pack() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pack.json"),
        r#"{
  "sort_items": [
    { "id": "spoon", "name": "Steel Spoon", "category": "metal" },
    { "id": "balloon", "name": "Helium Balloon", "category": "non-metal" }
  ],
  "questions": [
    { "id": 1, "prompt": "Is iron a metal?", "options": ["Yes", "No"], "correct": 0,
      "explanation": "Iron is a metal.", "emoji": "" },
    { "id": 2, "prompt": "Is neon a metal?", "options": ["Yes", "No"], "correct": 1,
      "explanation": "Neon is a noble gas.", "emoji": "" }
  ]
}"#,
    )
    .unwrap();
    dir
}

fn mm() -> Command {
    Command::cargo_bin("mm").unwrap()
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_commands() {
    mm().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("learn"))
        .stdout(predicate::str::contains("sort"))
        .stdout(predicate::str::contains("quiz"))
        .stdout(predicate::str::contains("about"));
}

// ---------------------------------------------------------------------------
// learn
// ---------------------------------------------------------------------------

#[test]
fn learn_lists_both_categories() {
    mm().arg("learn")
        .assert()
        .success()
        .stdout(predicate::str::contains("Metals"))
        .stdout(predicate::str::contains("Non-Metals"))
        .stdout(predicate::str::contains("Copper"))
        .stdout(predicate::str::contains("Sulfur"))
        .stdout(predicate::str::contains("6 elements"));
}

#[test]
fn learn_filters_by_category() {
    mm().args(["learn", "--category", "metal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aluminum"))
        .stdout(predicate::str::contains("Oxygen").not());
}

#[test]
fn learn_shows_element_card() {
    mm().args(["learn", "carbon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carbon"))
        .stdout(predicate::str::contains("Properties"))
        .stdout(predicate::str::contains("Fun fact:"));
}

#[test]
fn learn_unknown_element_fails() {
    mm().args(["learn", "unobtainium"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("element not found"));
}

#[test]
fn learn_unknown_category_fails() {
    mm().args(["learn", "--category", "plasma"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

// ---------------------------------------------------------------------------
// sort
// ---------------------------------------------------------------------------

#[test]
fn sort_full_game() {
    mm().arg("sort")
        .write_stdin(
            "pick gold\nmetal\npick oxygen\nmetal\nn\npick oxygen\nnon-metal\n\
             pick copper\nm\npick carbon\nn\npick aluminum\nm\npick sulfur\nn\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Gold Ring is indeed a metal!"))
        .stdout(predicate::str::contains(
            "Oxygen Tank doesn't go in the Metals box!",
        ))
        .stdout(predicate::str::contains("Pick an item first"))
        .stdout(predicate::str::contains("Final score: 60"));
}

#[test]
fn sort_status_shows_bins() {
    mm().args(["sort", "--seed", "7"])
        .write_stdin("pick copper\nm\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 / 6"))
        .stdout(predicate::str::contains("Copper Wire"));
}

#[test]
fn sort_custom_pack() {
    let dir = tiny_pack();
    mm().arg("sort")
        .arg("--content")
        .arg(dir.path().join("pack.json"))
        .write_stdin("pick spoon\nmetal\npick balloon\nnon-metal\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final score: 20"));
}

// ---------------------------------------------------------------------------
// quiz
// ---------------------------------------------------------------------------

#[test]
fn quiz_perfect_run() {
    let answers = ["b", "c", "b", "b", "b", "b", "c", "c", "b", "c"];
    let script: String = answers
        .iter()
        .map(|a| format!("{a}\nsubmit\nnext\n"))
        .collect();

    mm().arg("quiz")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz Complete!"))
        .stdout(predicate::str::contains("100 / 100 points"))
        .stdout(predicate::str::contains("Amazing!"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn quiz_wrong_answer_shows_explanation() {
    mm().arg("quiz")
        .write_stdin("a\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Don't worry, keep learning!"))
        .stdout(predicate::str::contains("Gold is a precious metal"));
}

#[test]
fn quiz_custom_pack_results_table() {
    let dir = tiny_pack();
    mm().arg("quiz")
        .arg("--content")
        .arg(dir.path().join("pack.json"))
        .write_stdin("a\nsubmit\nnext\na\nsubmit\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("10 / 20 points"))
        .stdout(predicate::str::contains("50%"))
        .stdout(predicate::str::contains("Is neon a metal?"));
}

// ---------------------------------------------------------------------------
// content
// ---------------------------------------------------------------------------

#[test]
fn content_validates_builtin() {
    mm().arg("content")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in"))
        .stdout(predicate::str::contains("Quiz questions"))
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn content_export_round_trips() {
    let output = mm().args(["content", "--export"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["sort_items"].as_array().unwrap().len(), 6);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.json");
    fs::write(&path, &output.stdout).unwrap();
    mm().arg("content")
        .arg("--content")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn content_rejects_one_sided_pack() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{
  "sort_items": [{ "id": "spoon", "name": "Spoon", "category": "metal" }],
  "questions": [{ "id": 1, "prompt": "?", "options": ["a", "b"], "correct": 0,
                  "explanation": "", "emoji": "" }]
}"#,
    )
    .unwrap();

    mm().arg("content")
        .arg("--content")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid content pack"));
}

#[test]
fn content_missing_file_fails() {
    mm().args(["content", "--content", "/nonexistent/pack.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

#[test]
fn about_shows_credits() {
    mm().arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("MetalMind"))
        .stdout(predicate::str::contains("Harish Chillapalli"))
        .stdout(predicate::str::contains("Nelson Mandela"));
}
