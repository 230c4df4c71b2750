//! qtidl CLI - Generate Qt meta-object headers from qtidl files
//!
//! Usage: `qtidl [OPTIONS] [INPUT]`
//!
//! Exit codes:
//! - `0` - header written, or no input given
//! - `1` - input could not be read or output could not be written
//! - `3` - input does not parse

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod error;
mod generate;
mod logging;

use error::CliError;

#[derive(Parser)]
#[command(name = "qtidl")]
#[command(author, version, about = "Generate Qt meta-object class headers from qtidl files", long_about = None)]
struct Cli {
    /// Path to the .qtidl input file
    input: Option<PathBuf>,

    /// Write the result to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to emit
    #[arg(short, long, value_enum, default_value_t = Emit::Header)]
    emit: Emit,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Output kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// C++ header text
    Header,
    /// Parsed syntax tree as pretty-printed JSON
    Ast,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    let Some(input) = cli.input else {
        eprintln!("Please provide an input file (see --help)");
        return ExitCode::SUCCESS;
    };

    match generate::run(&input, cli.emit, cli.output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report(err: &CliError) {
    tracing::debug!(code = err.exit_code(), "generation failed");
    eprintln!("error: {err}");
}
