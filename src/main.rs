use std::process::ExitCode;

use x88_chess::cli::{self, print, CliCommand, USAGE};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match cli::parse_command(args.as_slice()) {
        Ok(CliCommand::Run(options)) => options,
        Ok(CliCommand::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match cli::run(&options) {
        Ok(report) => {
            print::print_report(&report, options.divide);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
