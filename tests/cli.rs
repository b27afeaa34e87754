#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flashcards(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flashcards").unwrap();
    cmd.env("FLASHCARDS_HOME", home.path())
        .env_remove("FLASHCARDS_DB")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_card_workflow() {
    let home = TempDir::new().unwrap();

    flashcards(&home)
        .args(["stack", "create", "Spanish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stack created: Spanish"));

    flashcards(&home)
        .args(["add", "spanish", "hola", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card added successfully!"));

    flashcards(&home)
        .args(["add", "Spanish", "adios", "goodbye"])
        .assert()
        .success();

    flashcards(&home)
        .args(["list", "Spanish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card Number"))
        .stdout(predicate::str::contains("hola"))
        .stdout(predicate::str::contains("goodbye"));

    flashcards(&home)
        .args(["count", "Spanish"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));

    flashcards(&home)
        .args(["delete", "Spanish", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card deleted successfully!"));

    flashcards(&home)
        .args(["list", "Spanish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hola").not())
        .stdout(predicate::str::contains("adios"));

    assert!(home.path().join("flashcards.db").exists());
}

#[test]
fn test_unknown_stack_fails() {
    let home = TempDir::new().unwrap();

    flashcards(&home)
        .args(["list", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stack not found: Nope"));
}

#[test]
fn test_delete_out_of_range_fails() {
    let home = TempDir::new().unwrap();
    flashcards(&home)
        .args(["stack", "create", "Math"])
        .assert()
        .success();
    flashcards(&home)
        .args(["add", "Math", "2+2", "4"])
        .assert()
        .success();

    flashcards(&home)
        .args(["delete", "Math", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    flashcards(&home)
        .args(["count", "Math"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn test_study_without_stacks_exits_cleanly() {
    let home = TempDir::new().unwrap();

    flashcards(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No stacks found"));
}

#[test]
fn test_stack_management() {
    let home = TempDir::new().unwrap();
    flashcards(&home)
        .args(["stack", "create", "Draft"])
        .assert()
        .success();
    flashcards(&home)
        .args(["stack", "create", "draft"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    flashcards(&home)
        .args(["stack", "rename", "Draft", "Final"])
        .assert()
        .success();
    flashcards(&home)
        .args(["stack", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final"))
        .stdout(predicate::str::contains("Draft").not());

    flashcards(&home)
        .args(["stack", "delete", "Final"])
        .assert()
        .success();
    flashcards(&home)
        .args(["stack", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stacks found."));
}

#[test]
fn test_db_flag_overrides_location() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let db = other.path().join("custom.db");

    flashcards(&home)
        .arg("--db")
        .arg(&db)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.db"));

    assert!(db.exists());
    assert!(!home.path().join("flashcards.db").exists());
}

#[test]
fn test_config_set_and_show() {
    let home = TempDir::new().unwrap();

    flashcards(&home)
        .args(["config", "clear-screen", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clear-screen set to false"));

    flashcards(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("clear-screen = false"))
        .stdout(predicate::str::contains("cancel-keyword = quit"));

    flashcards(&home)
        .args(["config", "max-cell-width", "wide"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid value for max-cell-width"));
}

#[test]
fn test_config_recovers_from_unusable_database_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("blocker"), "not a directory").unwrap();

    flashcards(&home)
        .args(["config", "database-file", "blocker/cards.db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("database-file set to blocker/cards.db"));
    assert!(!home.path().join("flashcards.db").exists());

    flashcards(&home)
        .args(["stack", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    flashcards(&home)
        .args(["config", "database-file", "flashcards.db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("database-file set to flashcards.db"));

    flashcards(&home)
        .args(["stack", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stacks found."));
    assert!(home.path().join("flashcards.db").exists());
}
