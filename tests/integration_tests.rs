use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent-secret.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read nonexistent-secret.yaml"));
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("seal Kubernetes secrets"))
        .stdout(predicate::str::contains("--server"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sealui"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    cargo_bin_cmd!().arg("--bogus").assert().failure();
}
