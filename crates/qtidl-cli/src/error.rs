//! Error types for the qtidl CLI

use qtidl_core::SyntaxError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a CLI run
#[derive(Error, Debug)]
pub enum CliError {
    /// The input file is missing or unreadable
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid qtidl
    #[error("{path}:{source}")]
    Syntax {
        path: String,
        #[source]
        source: SyntaxError,
    },

    /// The syntax tree could not be rendered as JSON
    #[error("failed to serialize syntax tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Io { .. } => 1,
            CliError::Write { .. } => 1,
            CliError::Syntax { .. } => 3,
            CliError::Serialize(_) => 1,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
