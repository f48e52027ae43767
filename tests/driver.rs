#![cfg(feature = "parser")]

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test-cases/001.c");

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_picocc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run picocc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn dumps_tokens_then_summary() {
    let output = run(&[SAMPLE]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.first(), Some(&"TOK_INT"));
    assert_eq!(lines.get(1), Some(&"TOK_IDENTIFIER(add)"));
    assert_eq!(lines.last(), Some(&"parsed 4 toplevel item(s)"));
}

#[test]
fn lex_only_stops_before_parsing() {
    let output = run(&["--lex", SAMPLE]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.lines().all(|line| line.starts_with("TOK_")));
    assert_eq!(out.lines().last(), Some("TOK_CLOSE_BRACE"));
}

#[test]
fn parse_dumps_the_tree() {
    let output = run(&["--parse", SAMPLE]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("TranslationUnit"));
    assert!(out.contains("\"sum3\""));
    assert!(!out.contains("TOK_"));
}

#[test]
fn lex_error_is_reported_with_location_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.c");
    fs::write(&path, "int main() { return a@b; }\n").unwrap();

    let output = run(&[path.to_str().unwrap()]);
    assert!(!output.status.success());

    let err = stderr(&output);
    assert!(
        err.contains("bad.c:1:22: unexpected character: '@'"),
        "stderr: {err}"
    );
    assert!(!err.contains("lex error"), "stderr: {err}");
}

#[test]
fn parse_error_is_reported_with_location_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.c");
    fs::write(&path, "int main ( int ) { }\n").unwrap();

    let output = run(&[path.to_str().unwrap()]);
    assert!(!output.status.success());

    let err = stderr(&output);
    assert!(
        err.contains("bad.c:1:16: expected identifier, but got `)`"),
        "stderr: {err}"
    );
    assert!(!err.contains("parse error"), "stderr: {err}");
}

#[test]
fn missing_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.c");

    let output = run(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("does not exist"));
}
