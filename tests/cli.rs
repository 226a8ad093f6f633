// E2E tests for the mediaorg command line
use assert_fs::prelude::*;
use predicates::prelude::*;

mod common;
use common::{mediaorg, setup_source_dir};

const AUDIT_LOG: &str = "RenameScript_log.txt";

#[test]
fn test_help() {
    mediaorg()
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-move <target_dir>"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_help_wins_over_invalid_arguments() {
    mediaorg()
        .args(["/does/not/exist", "-move", "-rename", "-help"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_double_dash_help() {
    mediaorg()
        .args(["--help", "/does/not/exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_missing_source_argument() {
    mediaorg()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("source directory is required"));
}

#[test]
fn test_invalid_source_dir() {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let missing = temp_dir.child("missing");

    mediaorg()
        .arg(missing.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not a valid source directory"));
}

#[test]
fn test_invalid_target_dir() {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let source_dir = setup_source_dir(&temp_dir, &["IMG_0001.jpg"]);

    mediaorg()
        .arg(source_dir.path())
        .arg("-move")
        .arg(temp_dir.child("missing").path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not a valid target directory"));

    source_dir.child("IMG_0001.jpg").assert(predicate::path::exists());
    source_dir.child(AUDIT_LOG).assert(predicate::path::missing());
}

#[test]
fn test_move_and_rename_conflict() {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let source_dir = setup_source_dir(&temp_dir, &["IMG_0001.jpg", "clip.MOV"]);
    let target_dir = temp_dir.child("archive");
    target_dir.create_dir_all().unwrap();

    mediaorg()
        .arg(source_dir.path())
        .arg("-move")
        .arg(target_dir.path())
        .arg("-rename")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("cannot be used together"));

    source_dir.child("IMG_0001.jpg").assert("not really a photo");
    source_dir.child("clip.MOV").assert("not really a photo");
    source_dir.child(AUDIT_LOG).assert(predicate::path::missing());
}

#[test]
fn test_unknown_option() {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let source_dir = setup_source_dir(&temp_dir, &[]);

    mediaorg()
        .arg(source_dir.path())
        .arg("-copy")
        .assert()
        .code(1);
}

#[test]
fn test_file_without_date_is_left_alone() {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let source_dir = setup_source_dir(&temp_dir, &["IMG_0001.jpg", "notes.txt"]);
    source_dir
        .child(AUDIT_LOG)
        .write_str("entry from an earlier run\n")
        .unwrap();

    mediaorg()
        .arg(source_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing file:"))
        .stdout(predicate::str::contains("No creation date found"));

    source_dir.child("IMG_0001.jpg").assert("not really a photo");
    source_dir.child("notes.txt").assert("not really a photo");
    source_dir
        .child(AUDIT_LOG)
        .assert(predicate::str::contains("No creation date found"))
        .assert(predicate::str::contains("IMG_0001.jpg"))
        .assert(predicate::str::contains("earlier run").not())
        .assert(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_recursive_run_logs_per_directory() {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let source_dir = setup_source_dir(&temp_dir, &["a.jpg"]);
    let sub_dir = source_dir.child("sub");
    sub_dir.create_dir_all().unwrap();
    sub_dir.child("b.mp4").write_str("not really a video").unwrap();
    sub_dir.child(AUDIT_LOG).write_str("stale sub entry\n").unwrap();

    mediaorg()
        .arg(source_dir.path())
        .arg("-r")
        .assert()
        .success();

    source_dir
        .child(AUDIT_LOG)
        .assert(predicate::str::contains("a.jpg"))
        .assert(predicate::str::contains("b.mp4").not());
    sub_dir
        .child(AUDIT_LOG)
        .assert(predicate::str::contains("b.mp4"))
        .assert(predicate::str::contains("a.jpg").not())
        .assert(predicate::str::contains("stale sub entry").not());
}

#[test]
fn test_no_move_without_target() {
    let temp_dir = assert_fs::TempDir::new().unwrap();
    let source_dir = setup_source_dir(&temp_dir, &["IMG_0001.jpg"]);

    mediaorg()
        .arg(source_dir.path())
        .arg("-rename")
        .assert()
        .success()
        .stdout(predicate::str::contains("moved").not());
}
