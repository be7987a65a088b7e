//! Command-line front end: argument parsing, option handling and report
//! output for perft runs.

use std::fmt;

use crate::board::{Board, FenError};
use crate::perft::PerftReport;

pub mod command;
pub mod options;
pub mod print;

pub use command::{parse_command, CliCommand, USAGE};
pub use options::PerftOptions;

/// Error type for command-line parsing and execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// No subcommand given
    MissingCommand,
    /// Subcommand other than `perft` or `divide`
    UnknownCommand(String),
    /// Flag given without its value
    MissingValue { flag: String },
    /// Value that does not parse for the named option
    InvalidValue { name: String, value: String },
    /// Unrecognized flag or option name
    UnknownOption(String),
    /// Starting position could not be loaded
    InvalidFen(FenError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingCommand => write!(f, "Missing command"),
            CliError::UnknownCommand(cmd) => write!(f, "Unknown command '{cmd}'"),
            CliError::MissingValue { flag } => write!(f, "Missing value for '{flag}'"),
            CliError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for {name}")
            }
            CliError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            CliError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidFen(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FenError> for CliError {
    fn from(e: FenError) -> Self {
        CliError::InvalidFen(e)
    }
}

/// Load the configured position and run perft on it.
///
/// More than one thread selects the parallel driver; both drivers report
/// per-root-move counts.
pub fn run(options: &PerftOptions) -> Result<PerftReport, CliError> {
    let mut board = Board::try_from_fen(&options.fen)?;
    let report = if options.threads > 1 {
        board.perft_parallel(options.depth, options.threads)
    } else {
        board.perft_divide(options.depth)
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_run_start_position() {
        let options = PerftOptions {
            depth: 2,
            ..PerftOptions::default()
        };
        let report = run(&options).unwrap();
        assert_eq!(report.total_nodes, 400);
        assert_eq!(report.entries.len(), 20);
    }

    #[test]
    fn test_run_rejects_bad_fen() {
        let options = PerftOptions {
            fen: "8/8/8 w - -".to_string(),
            ..PerftOptions::default()
        };
        let err = run(&options).unwrap_err();
        assert!(matches!(err, CliError::InvalidFen(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Invalid FEN"));
    }
}
