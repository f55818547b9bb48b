use assert_cmd::Command;
use predicates::prelude::*;

fn ukpostcode() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ukpostcode"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_flag() {
    ukpostcode()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ukpostcode"));
}

#[test]
fn valid_arguments_exit_zero() {
    ukpostcode()
        .args(["EC1A 1BB", "M1 1AE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid    EC1A 1BB"))
        .stdout(predicate::str::contains("valid    M1 1AE"));
}

#[test]
fn invalid_argument_exits_with_validation_failure() {
    ukpostcode()
        .args(["EC1A 1BB", "GU2634 6LN"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("invalid  GU2634 6LN  (invalid_length:"));
}

#[test]
fn reads_stdin_when_no_arguments() {
    ukpostcode()
        .write_stdin("B33 8TH\nTRE-123\n")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("valid    B33 8TH"))
        .stdout(predicate::str::contains("invalid  TRE-123  (malformed_input:"));
}

#[test]
fn json_format_reports_error_kind() {
    ukpostcode()
        .args(["--format", "json", "1ER UIT"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains(r#""kind": "invalid_pattern""#))
        .stdout(predicate::str::contains(r#""invalid": 1"#));
}

#[test]
fn quiet_prints_nothing() {
    ukpostcode()
        .args(["--quiet", "! !"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());
}

#[test]
fn unknown_format_is_argument_error() {
    ukpostcode()
        .args(["--format", "yaml", "M1 1AE"])
        .assert()
        .code(2);
}

#[test]
fn hyphen_leading_postcode_after_separator_is_validated() {
    ukpostcode()
        .args(["--", "-M1 1AE"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("invalid  -M1 1AE  (invalid_character:"));
}
