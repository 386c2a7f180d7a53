//! Integration tests for the binary's non-interactive paths.
//!
//! A successful run enters the alternate screen and waits for input, so
//! these tests only drive the failure paths and `--help`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn demoscope() -> Command {
    Command::cargo_bin("demoscope").unwrap()
}

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn help_names_the_dataset_argument() {
    demoscope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scatter plot"))
        .stdout(predicate::str::contains("FILE"));
}

#[test]
fn missing_file_fails_before_any_rendering() {
    demoscope()
        .arg("/no/such/data.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open dataset"));
}

#[test]
fn malformed_header_is_reported_with_the_missing_column() {
    let file = write_csv("state,abbr,age,income,healthcare,obesity,smokes\nOhio,OH,36,48000,20,30,21\n");
    demoscope()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing column 'poverty'"));
}

#[test]
fn non_numeric_field_is_reported_with_the_record_number() {
    let file = write_csv(
        "state,abbr,poverty,age,income,healthcare,obesity,smokes\n\
         Ohio,OH,10,36.1,48000,20,30,21\n\
         Texas,TX,lots,34.5,53000,5,32,18\n",
    );
    demoscope()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse record 2"));
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let file = write_csv("state,abbr,poverty,age,income,healthcare,obesity,smokes\n");
    demoscope()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty dataset"));
}
