//! Integration tests for the scanner and the `corgi` binary.
//!
//! These tests drive the public tokenizer API on whole programs and run the
//! command-line tool against files written to a temporary directory.

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use corgi::lexer::{lexer::tokenize, tokens::TokenKind};
use predicates::prelude::*;
use tempfile::TempDir;

fn corgi_bin() -> Command {
    let mut cmd = Command::new(PathBuf::from(env!("CARGO_BIN_EXE_corgi")));
    cmd.env_remove("CORGI_FORMAT")
        .env_remove("CORGI_VERBOSE")
        .env_remove("CORGI_NO_COLOR");
    cmd
}

/// Writes `source` to `main.cg` inside a fresh temporary directory.
fn source_file(source: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("main.cg");
    fs::write(&path, source).expect("Failed to write source file");
    (dir, path)
}

#[test]
fn test_tokenize_program() {
    let source = "function add(a, b) {\n  a + b // sum\n}\n".to_string();
    let tokens = tokenize(&source, Some("main.cg".to_string())).unwrap();

    let kinds = tokens.into_iter().map(|token| token.kind).collect::<Vec<_>>();
    let ident = |name: &str| TokenKind::Identifier(name.to_string());

    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            ident("add"),
            TokenKind::Symbol('('),
            ident("a"),
            TokenKind::Symbol(','),
            ident("b"),
            TokenKind::Symbol(')'),
            TokenKind::Symbol('{'),
            TokenKind::Newline,
            ident("a"),
            TokenKind::Symbol('+'),
            ident("b"),
            TokenKind::Comment,
            ident("sum"),
            TokenKind::Newline,
            TokenKind::Symbol('}'),
            TokenKind::Newline,
        ]
    );
}

#[test]
fn test_cli_requires_path() {
    corgi_bin()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_rejects_extra_arguments() {
    corgi_bin()
        .args(["a.cg", "b.cg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    corgi_bin()
        .arg(dir.path().join("missing.cg"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_directory() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    corgi_bin()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a regular file"));
}

#[test]
fn test_cli_prints_debug_list() {
    let (_dir, path) = source_file("function foo\n");

    corgi_bin()
        .arg(&path)
        .assert()
        .success()
        .stdout("[Keyword, Identifier(\"foo\"), Newline]\n");
}

#[test]
fn test_cli_empty_file() {
    let (_dir, path) = source_file("");

    corgi_bin().arg(&path).assert().success().stdout("[]\n");
}

#[test]
fn test_cli_lines_format() {
    let (_dir, path) = source_file("x + 1");

    corgi_bin()
        .arg(&path)
        .args(["--format", "lines"])
        .assert()
        .success()
        .stdout("identifier (x)\nsymbol (+)\nnumber (1)\n");
}

#[test]
fn test_cli_format_from_env() {
    let (_dir, path) = source_file("x");

    corgi_bin()
        .arg(&path)
        .env("CORGI_FORMAT", "lines")
        .assert()
        .success()
        .stdout("identifier (x)\n");
}

#[test]
fn test_cli_json_format() {
    let (_dir, path) = source_file("\"hi\"");

    let output = corgi_bin()
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .expect("Failed to run corgi");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["kind"], "string");
    assert_eq!(value[0]["text"], "\"hi\"");
    assert_eq!(value[0]["end"], 4);
}

#[test]
fn test_cli_scan_failure() {
    let (_dir, path) = source_file("a /x");

    corgi_bin()
        .arg(&path)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error: UnexpectedCharacter"))
        .stderr(predicate::str::contains("1 | a /x"));
}

#[test]
fn test_cli_partial_output() {
    let (_dir, path) = source_file("a \"b\\n\"");

    corgi_bin()
        .arg(&path)
        .arg("--partial")
        .assert()
        .code(1)
        .stdout("[Identifier(\"a\")]\n")
        .stderr(predicate::str::contains("UnsupportedFeature"));
}
