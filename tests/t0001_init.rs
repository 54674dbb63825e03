use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

mod common;

#[test]
fn init_explicit_directory() {
    let temp = tempfile::tempdir().unwrap();
    let path = fs::canonicalize(temp.path()).unwrap();

    let assert = Command::cargo_bin("pit")
        .unwrap()
        .args(&["init", path.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(
        String::from_utf8(assert.get_output().stdout.clone()).unwrap(),
        format!("Initialized empty Pit repository in {}\n", path.display())
    );

    assert!(path.join(".git/objects").is_dir());
    assert!(path.join(".git/refs").is_dir());
}

#[test]
fn init_defaults_to_current_dir() {
    let temp = tempfile::tempdir().unwrap();

    common::pit_in(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Initialized empty Pit repository in ",
        ));

    assert!(temp.path().join(".git/objects").is_dir());
}

#[test]
fn objects_dir_is_empty() {
    let temp = tempfile::tempdir().unwrap();
    common::pit_in(temp.path()).arg("init").assert().success();

    let objects_dir = temp.path().join(".git/objects");
    assert_eq!(fs::read_dir(objects_dir).unwrap().count(), 0);
}

#[test]
fn init_twice_fails() {
    let temp = tempfile::tempdir().unwrap();
    common::pit_in(temp.path()).arg("init").assert().success();

    common::pit_in(temp.path())
        .arg("init")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("ERROR: git dir "))
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_missing_parent_fails() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("a/b");

    Command::cargo_bin("pit")
        .unwrap()
        .args(&["init", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("ERROR: "));

    assert!(!temp.path().join("a").exists());
}
