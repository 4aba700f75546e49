use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("notehub").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Server-rendered NoteHub category filter pages"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("notehub").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_categories() {
    let mut cmd = Command::cargo_bin("notehub").unwrap();
    cmd.arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("All\n").and(predicate::str::contains("Personal")));
}

#[test]
fn test_cli_metadata_is_case_insensitive() {
    let mut cmd = Command::cargo_bin("notehub").unwrap();
    cmd.env("NOTEHUB_SITE_URL", "https://notes.example.com")
        .args(["metadata", "work"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NoteHub - Work")
                .and(predicate::str::contains("https://notes.example.com/notes/filter/Work")),
        );
}

#[test]
fn test_cli_metadata_unknown_category() {
    let mut cmd = Command::cargo_bin("notehub").unwrap();
    cmd.args(["metadata", "bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NoteHub - Not Found"));
}

#[test]
fn test_cli_render_unknown_category_fails_without_fetch() {
    // Unroutable API URL: the command must fail on the slug before any request.
    let mut cmd = Command::cargo_bin("notehub").unwrap();
    cmd.env("NOTEHUB_API_URL", "http://127.0.0.1:9")
        .args(["render", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found: category 'bogus'"));
}

#[test]
fn test_cli_render_empty_slug_fails() {
    let mut cmd = Command::cargo_bin("notehub").unwrap();
    cmd.env("NOTEHUB_API_URL", "http://127.0.0.1:9")
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
