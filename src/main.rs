//! CLI entry point printing the route between two grid features

use clap::Parser;
use gridroute::io::cli::{Cli, InputProcessor};
use std::process::ExitCode;

// Allow print for the route output and the user-facing error message
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let processor = InputProcessor::new(cli);
    match processor.process() {
        Ok(instructions) => {
            print!("{instructions}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
