#![allow(non_snake_case)]

use super::*;

#[test]
fn SyntaxError___display___includes_position_and_expectation() {
    let err = SyntaxError::new(Position::new(12, 2, 5), "'{'", "string \"x\"");

    let display = err.to_string();

    assert_eq!(display, "2:5: unexpected string \"x\", expected '{'");
}

#[test]
fn SyntaxError___new___keeps_byte_offset() {
    let err = SyntaxError::new(Position::new(40, 3, 1), "property type", "identifier `int`");

    assert_eq!(err.position.offset, 40);
    assert_eq!(err.expected, "property type");
    assert_eq!(err.found, "identifier `int`");
}

#[test]
fn UnknownPropertyType___display___names_the_keyword() {
    let err = UnknownPropertyType("QList".into());

    assert_eq!(err.to_string(), "unknown property type: QList");
}
