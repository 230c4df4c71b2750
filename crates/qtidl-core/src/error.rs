//! Error types for qtidl parsing

use crate::lexer::Position;
use thiserror::Error;

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, SyntaxError>;

/// The input does not conform to the grammar at some position.
///
/// Parsing stops at the first error; no partial document is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{position}: unexpected {found}, expected {expected}")]
pub struct SyntaxError {
    /// Where the offending token (or character) starts
    pub position: Position,

    /// What the grammar would have accepted here
    pub expected: String,

    /// Description of what was actually found
    pub found: String,
}

impl SyntaxError {
    pub fn new(position: Position, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            position,
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// A type keyword outside the closed set of property types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown property type: {0}")]
pub struct UnknownPropertyType(pub String);

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
