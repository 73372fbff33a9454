//! End-to-end tests for the clex binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

fn clex() -> Command {
    Command::cargo_bin("clex").expect("binary should build")
}

#[test]
fn dumps_tokens_one_per_line() {
    let file = source_file("int x = 5;\n");

    clex()
        .arg(file.path())
        .assert()
        .success()
        .stdout("0 - int\n0 - x\n3 - =\n1 - 5\n3 - ;\n");
}

#[test]
fn dumps_strings_without_quotes() {
    let file = source_file("\"hello world\"\n");

    clex()
        .arg(file.path())
        .assert()
        .success()
        .stdout("2 - hello world\n");
}

#[test]
fn skips_comment_lines() {
    let file = source_file("// comment only\nfor\n");

    clex()
        .arg(file.path())
        .assert()
        .success()
        .stdout("0 - for\n");
}

#[test]
fn empty_input_prints_nothing() {
    let file = source_file("");

    clex().arg(file.path()).assert().success().stdout("");
}

#[test]
fn rejects_wrong_argument_count() {
    clex()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn rejects_unreadable_file() {
    clex()
        .arg("no/such/file.c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open file"));
}

#[test]
fn malformed_number_is_fatal() {
    let file = source_file("1.2.3\n");

    clex()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed number"))
        .stderr(predicate::str::contains("line 1 col 4"));
}

#[test]
fn unterminated_string_is_fatal() {
    let file = source_file("\"unterminated\n");

    clex()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing closing quote"));
}

#[test]
fn tokens_before_the_error_are_still_printed() {
    let file = source_file("x = @\n");

    clex()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("0 - x\n3 - =\n")
        .stderr(predicate::str::contains("unexpected character '@'"));
}
