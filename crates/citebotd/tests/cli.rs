//! Integration tests for the citebotd host.
//!
//! These stay off the network: watch mode on input without links must
//! stay silent, and the CLI surface should describe itself.

use assert_cmd::Command;
use predicates::prelude::*;

// Helper function to create a clean command instance
fn citebotd() -> Command { Command::cargo_bin("citebotd").unwrap() }

#[test]
fn test_help_describes_commands() {
  citebotd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("fetch"))
    .stdout(predicate::str::contains("watch"));
}

#[test]
fn test_watch_ignores_lines_without_links() {
  citebotd()
    .arg("watch")
    .write_stdin("hello there\nno links in this one\nhttps://example.com/abs/123\n")
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
}

#[test]
fn test_fetch_requires_url() {
  citebotd().arg("fetch").assert().failure();
}
