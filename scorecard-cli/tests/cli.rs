use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_tool() {
    let mut cmd = Command::cargo_bin("scorecard").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Rate each record"))
        .stdout(predicate::str::contains("--print-on-exit"));
}

#[test]
fn outputs_version() {
    let mut cmd = Command::cargo_bin("scorecard").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(format!("scorecard {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_format() {
    let mut cmd = Command::cargo_bin("scorecard").unwrap();
    cmd.args(["--format", "xml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
