// Surface-level CLI tests: argument parsing and help text. Anything
// needing a backend lives in the core crate's wiremock tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn rackview() -> Command {
    Command::cargo_bin("rackview").expect("binary should build")
}

#[test]
fn no_subcommand_shows_help_and_exits_nonzero() {
    rackview()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_all_top_level_commands() {
    rackview()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("whoami"))
        .stdout(predicate::str::contains("servers"))
        .stdout(predicate::str::contains("logs"));
}

#[test]
fn delete_requires_a_numeric_id() {
    rackview()
        .args(["servers", "delete", "web-01"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    rackview().arg("frobnicate").assert().failure().code(2);
}
