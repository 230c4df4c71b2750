//! The `qtidl <INPUT>` pipeline: read, parse, render, write.

use crate::Emit;
use crate::error::CliError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Read `input`, render it and write the result to `output` or stdout.
///
/// Nothing is written when reading or parsing fails.
pub fn run(input: &Path, emit: Emit, output: Option<&Path>) -> Result<(), CliError> {
    let source = fs::read_to_string(input).map_err(|source| CliError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let rendered = render(&source, &input.display().to_string(), emit)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(input = %input.display(), output = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: "<stdout>".into(),
                    source,
                })?;
        }
    }

    Ok(())
}

/// Turn IDL text into the requested output kind.
pub fn render(source: &str, origin: &str, emit: Emit) -> Result<String, CliError> {
    let document = qtidl_core::parse(source).map_err(|source| CliError::Syntax {
        path: origin.to_string(),
        source,
    })?;

    info!(
        includes = document.includes.len(),
        types = document.types.len(),
        "parsed {origin}"
    );

    match emit {
        Emit::Header => Ok(qtidl_core::generate(&document)),
        Emit::Ast => {
            let mut json = serde_json::to_string_pretty(&document)?;
            json.push('\n');
            Ok(json)
        }
    }
}
