#![allow(non_snake_case)]

use super::*;
use qtidl_core::Position;

fn syntax_error() -> CliError {
    CliError::Syntax {
        path: "foo.qtidl".into(),
        source: SyntaxError::new(Position::new(7, 2, 3), "property type", "identifier `int`"),
    }
}

#[test]
fn CliError___io___returns_code_1() {
    let err = CliError::Io {
        path: "missing.qtidl".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };

    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "failed to read missing.qtidl: not found");
}

#[test]
fn CliError___write___returns_code_1() {
    let err = CliError::Write {
        path: "out.h".into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };

    assert_eq!(err.exit_code(), 1);
}

#[test]
fn CliError___syntax___returns_code_3() {
    assert_eq!(syntax_error().exit_code(), 3);
}

#[test]
fn CliError___syntax___displays_file_line_column() {
    assert_eq!(
        syntax_error().to_string(),
        "foo.qtidl:2:3: unexpected identifier `int`, expected property type"
    );
}

#[test]
fn CliError___from_serde_error___converts_to_serialize() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: CliError = json_err.into();

    assert!(matches!(err, CliError::Serialize(_)));
    assert_eq!(err.exit_code(), 1);
}
