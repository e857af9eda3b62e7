//! End-to-end tests for the erlterm binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn fmt_formats_stdin_to_stdout() {
    Command::cargo_bin("erlterm")
        .unwrap()
        .arg("fmt")
        .write_stdin("{record, <<\"foo\">>, 255, 128}.")
        .assert()
        .success()
        .stdout("{\n  record,\n  <<\"foo\">>,\n  255,\n  128\n}.\n");
}

#[test]
fn fmt_formats_a_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[{{a, 1}}, {{b, 2}}].").unwrap();

    Command::cargo_bin("erlterm")
        .unwrap()
        .arg("fmt")
        .arg(file.path())
        .assert()
        .success()
        .stdout("[\n  {a, 1},\n  {b, 2}\n].\n");
}

#[test]
fn fmt_reports_lex_errors_on_stderr() {
    Command::cargo_bin("erlterm")
        .unwrap()
        .arg("fmt")
        .write_stdin("123.0e+-100")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scientific notation"));
}

#[test]
fn fmt_fails_on_missing_file() {
    Command::cargo_bin("erlterm")
        .unwrap()
        .arg("fmt")
        .arg("no/such/file.terms")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading file"));
}

#[test]
fn tokens_dumps_the_sequence_as_json() {
    Command::cargo_bin("erlterm")
        .unwrap()
        .arg("tokens")
        .write_stdin("foo.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"Atom\""))
        .stdout(predicate::str::contains("\"literal\": \"foo\""))
        .stdout(predicate::str::contains("\"kind\": \"EndOfInput\""));
}

#[test]
fn requires_a_subcommand() {
    Command::cargo_bin("erlterm").unwrap().assert().failure();
}
