use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const VALID_PROGRAM: &str = "module main\n\nfn main() {\nstd.println(\"hello\")\n}\n";

#[test]
fn dumps_the_tree_for_a_valid_file() {
    let dir = tempdir().expect("tempdir");
    let input_path = dir.path().join("main.th");
    fs::write(&input_path, VALID_PROGRAM).expect("write input");

    Command::cargo_bin("thistle-cli")
        .expect("binary exists")
        .arg("--input")
        .arg(&input_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("module: main"))
        .stdout(predicate::str::contains("call std.println"));
}

#[test]
fn reads_source_from_stdin() {
    Command::cargo_bin("thistle-cli")
        .expect("binary exists")
        .write_stdin(VALID_PROGRAM)
        .assert()
        .success()
        .stdout(predicate::str::contains("module: main"));
}

#[test]
fn check_mode_stays_quiet_on_success() {
    Command::cargo_bin("thistle-cli")
        .expect("binary exists")
        .arg("--check")
        .write_stdin(VALID_PROGRAM)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn reports_semantic_errors_with_a_caret() {
    let dir = tempdir().expect("tempdir");
    let input_path = dir.path().join("bad.th");
    fs::write(&input_path, "module main\n\nfn main() {\nmissing()\n}\n")
        .expect("write input");

    Command::cargo_bin("thistle-cli")
        .expect("binary exists")
        .arg("--input")
        .arg(&input_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find function `missing`"))
        .stderr(predicate::str::contains("^"));
}

#[test]
fn reports_parse_errors() {
    Command::cargo_bin("thistle-cli")
        .expect("binary exists")
        .write_stdin("module main\nfn {\n}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("function"));
}

#[test]
fn reports_missing_input_file() {
    Command::cargo_bin("thistle-cli")
        .expect("binary exists")
        .arg("--input")
        .arg("does-not-exist.th")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));
}
