use super::{CliError, PerftOptions};

pub const USAGE: &str = "\
usage: x88_chess perft <depth> [--fen <FEN>] [--threads <n>]
       x88_chess divide <depth> [--fen <FEN>] [--threads <n>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(PerftOptions),
    Help,
}

/// Parse command-line arguments (without the program name).
///
/// A FEN may be passed as one quoted argument or as several unquoted ones;
/// everything up to the next `--` flag is joined.
pub fn parse_command<S: AsRef<str>>(args: &[S]) -> Result<CliCommand, CliError> {
    let parts: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let Some(&name) = parts.first() else {
        return Err(CliError::MissingCommand);
    };

    let mut options = PerftOptions::default();
    match name {
        "perft" => {}
        "divide" => options.divide = true,
        "help" | "--help" | "-h" => return Ok(CliCommand::Help),
        other => return Err(CliError::UnknownCommand(other.to_string())),
    }

    let mut i = 1;
    if let Some(depth) = parts.get(i).filter(|p| !p.starts_with("--")) {
        options.apply_option("depth", depth)?;
        i += 1;
    }

    while i < parts.len() {
        let flag = parts[i];
        i += 1;
        match flag {
            "--fen" => {
                let start = i;
                while i < parts.len() && !parts[i].starts_with("--") {
                    i += 1;
                }
                if start == i {
                    return Err(CliError::MissingValue {
                        flag: flag.to_string(),
                    });
                }
                options.apply_option("fen", &parts[start..i].join(" "))?;
            }
            "--threads" | "--depth" => {
                let value = parts.get(i).ok_or_else(|| CliError::MissingValue {
                    flag: flag.to_string(),
                })?;
                options.apply_option(&flag[2..], value)?;
                i += 1;
            }
            other => return Err(CliError::UnknownOption(other.to_string())),
        }
    }

    Ok(CliCommand::Run(options))
}
