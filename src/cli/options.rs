#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::STARTING_FEN;

use super::CliError;

const MAX_THREADS: usize = 256;

/// Settings for one perft run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerftOptions {
    pub depth: u32,
    pub fen: String,
    pub threads: usize,
    /// Print the per-root-move breakdown
    pub divide: bool,
}

impl Default for PerftOptions {
    fn default() -> Self {
        PerftOptions {
            depth: 1,
            fen: STARTING_FEN.to_string(),
            threads: 1,
            divide: false,
        }
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

impl PerftOptions {
    /// Set one option by name. Names are case-insensitive.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), CliError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "depth" => self.depth = parse_value(&normalized, value)?,
            "fen" => self.fen = value.trim().to_string(),
            "threads" => {
                let threads: usize = parse_value(&normalized, value)?;
                self.threads = threads.clamp(1, MAX_THREADS);
            }
            "divide" => {
                self.divide = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "1" | "yes" => true,
                    "false" | "0" | "no" => false,
                    _ => {
                        return Err(CliError::InvalidValue {
                            name: normalized,
                            value: value.to_string(),
                        })
                    }
                };
            }
            _ => return Err(CliError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}
