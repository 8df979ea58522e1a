use thiserror::Error;

use crate::battle::{format_summary, resolve_battle};
use crate::data::{load_roster, RosterError};

/// Failures shown to the user. `Display` is the exact message printed.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid number of parameters")]
    InvalidArgumentCount { found: usize },
    /// Covers both unreadable files and malformed records.
    #[error("Couldn't read file {path}")]
    FileRead {
        path: String,
        #[source]
        source: RosterError,
    },
}

/// Pick the roster path out of `args` (program name first).
pub fn parse_roster_path(args: &[String]) -> Result<&str, CliError> {
    match args {
        [_, path] => Ok(path.as_str()),
        _ => Err(CliError::InvalidArgumentCount {
            found: args.len().saturating_sub(1),
        }),
    }
}

/// Load the roster named on the command line and render the battle report.
pub fn battle_report_for_args(args: &[String]) -> Result<String, CliError> {
    let path = parse_roster_path(args)?;
    let roster = load_roster(path).map_err(|source| CliError::FileRead {
        path: path.to_string(),
        source,
    })?;
    Ok(format_summary(&resolve_battle(&roster)))
}

/// Print the report, or the error message, to stdout. Always exits normally.
pub fn run_with_args(args: &[String]) -> i32 {
    match battle_report_for_args(args) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            match &err {
                CliError::InvalidArgumentCount { found } => {
                    tracing::warn!(found, "expected exactly one roster path");
                }
                CliError::FileRead { path, source } => {
                    tracing::warn!(%path, error = %source, "roster could not be loaded");
                }
            }
            println!("{err}");
        }
    }
    0
}
