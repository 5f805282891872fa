use assert_cmd::Command;
use predicates::prelude::*;

fn aurum() -> Command {
    Command::cargo_bin("aurum").unwrap()
}

#[test]
fn test_no_arguments_shows_usage() {
    aurum()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_search_requires_terms() {
    aurum()
        .arg("search")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("TERMS"));
}

#[test]
fn test_info_requires_names() {
    aurum().args(["info"]).assert().failure().code(2);
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    aurum()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_version_flag() {
    aurum()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    aurum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("cache"));
}

#[test]
fn test_cache_info_with_empty_home() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    aurum()
        .env("AURUM_HOME", temp_dir.path())
        .args(["cache", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No snapshot found"));
}

#[test]
fn test_local_search_without_snapshot_fails_cleanly() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    // No snapshot on disk and an unreachable AUR: the query must fail with
    // a load error on stderr, not partial output.
    aurum()
        .env("AURUM_HOME", temp_dir.path())
        .args([
            "search",
            "--local",
            "--url",
            "http://127.0.0.1:1",
            "ripgrep",
        ])
        .assert()
        .failure()
        .code(20)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unable to load package snapshot"));
}
