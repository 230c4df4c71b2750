//! Integration tests for the qtidl binary.
//!
//! Drives the built executable and checks stdout, stderr and exit codes.

#![allow(non_snake_case)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const EXAMPLE: &str = r#"include "QObject"
Foo {
function
"doThing(int)" : "void"
signal
"somethingHappened()"
qint32 count
}
"#;

const EXPECTED_HEADER: &str = "\
#pragma once
#include \"QObject\"

class Foo : public QObject {
\tQ_OBJECT
public:
\texplicit Foo(QObject *parent = nullptr);
\tQ_PROPERTY(qint32 count MEMBER m_count NOTIFY countChanged)

\tQ_INVOKABLE void doThing(int);

signals:
\tvoid countChanged(qint32 val);

\tvoid somethingHappened();

private:
\tqint32 m_count;
};
";

fn qtidl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qtidl"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn qtidl___valid_input___prints_header_and_exits_0() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "foo.qtidl", EXAMPLE);

    let output = qtidl(&[arg(&input)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_HEADER);
}

#[test]
fn qtidl___no_argument___prints_usage_note_and_exits_0() {
    let output = qtidl(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please provide an input file"));
}

#[test]
fn qtidl___missing_file___exits_1() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.qtidl");

    let output = qtidl(&[arg(&missing)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn qtidl___syntax_error___exits_3_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad.qtidl", "Foo {\nfunction\nint count\n}\n");

    let output = qtidl(&[arg(&input)]);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("3:1: unexpected identifier `int`, expected property type"));
}

#[test]
fn qtidl___output_flag___writes_file_instead_of_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "foo.qtidl", EXAMPLE);
    let header = dir.path().join("foo.h");

    let output = qtidl(&[arg(&input), "--output", arg(&header)]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&header).unwrap(), EXPECTED_HEADER);
}

#[test]
fn qtidl___emit_ast___prints_json() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "foo.qtidl", EXAMPLE);

    let output = qtidl(&["--emit", "ast", arg(&input)]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"name\": \"Foo\""));
    assert!(stdout.contains("\"type\": \"qint32\""));
}

#[test]
fn qtidl___verbose___logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "foo.qtidl", EXAMPLE);

    let output = qtidl(&["-vv", arg(&input)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_HEADER);
    assert!(String::from_utf8_lossy(&output.stderr).contains("parsed document"));
}
