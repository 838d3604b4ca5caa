//! CLI integration tests
//!
//! These stay off the network: argument handling, validation failures, and
//! help output. Live audits are exercised manually and through the core
//! crate's tests.

use predicates::prelude::*;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("serplens").unwrap()
}

#[test]
fn test_cli_requires_url() {
    cmd().assert().failure().stderr(predicate::str::contains("URL"));
}

#[test]
fn test_cli_help_lists_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--competitor"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--no-sampling"));
}

#[test]
fn test_cli_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("serplens"));
}

#[test]
fn test_cli_invalid_url_fails() {
    cmd()
        .arg("definitely not a url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}

#[test]
fn test_cli_unsupported_scheme_fails() {
    cmd()
        .arg("ftp://example.com/page")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scheme"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    cmd()
        .args(["--crawl", "https://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
