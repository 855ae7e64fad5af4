//! Command-line wrapper that reads grid text and produces route instructions

use crate::io::configuration::{DEFAULT_FROM_MARKER, DEFAULT_TO_MARKER, ROW_DELIMITER};
use crate::io::error::{Result, input_error};
use crate::spatial::grid::Grid;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Name reported for standard input in error messages
const STDIN_NAME: &str = "<stdin>";

#[derive(Parser, Debug)]
#[command(name = "gridroute")]
#[command(
    author,
    version,
    about = "Print UP/DOWN/LEFT/RIGHT moves between two features of a character grid"
)]
/// Command-line arguments for the route tool
pub struct Cli {
    /// Grid text file to read (standard input when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Marker of the feature to start from
    #[arg(short, long, default_value_t = DEFAULT_FROM_MARKER)]
    pub from: char,

    /// Marker of the feature to walk to
    #[arg(short, long, default_value_t = DEFAULT_TO_MARKER)]
    pub to: char,

    /// Treat the first line as part of the grid instead of a header
    #[arg(short, long)]
    pub no_header: bool,
}

impl Cli {
    /// Check if the first input line should be discarded
    pub const fn skip_header(&self) -> bool {
        !self.no_header
    }
}

/// Drop everything up to and including the first newline
///
/// Text without a newline is a header only and leaves nothing behind.
pub fn strip_header(input: &str) -> &str {
    input
        .split_once(ROW_DELIMITER)
        .map_or("", |(_, body)| body)
}

/// Runs one read, parse and route cycle for the given arguments
pub struct InputProcessor {
    cli: Cli,
}

impl InputProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read the input and compute the route instructions
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the grid text is
    /// malformed or either marker is missing from the grid
    pub fn process(&self) -> Result<String> {
        let input = self.read_input()?;
        self.route_text(&input)
    }

    /// Read the whole input file, or standard input when no file was given
    ///
    /// # Errors
    ///
    /// Returns `GridError::Input` if reading fails
    pub fn read_input(&self) -> Result<String> {
        match &self.cli.input {
            Some(path) => {
                debug!("reading grid from {}", path.display());
                std::fs::read_to_string(path).map_err(|e| input_error(path, e))
            }
            None => {
                debug!("reading grid from standard input");
                std::io::read_to_string(std::io::stdin()).map_err(|e| input_error(STDIN_NAME, e))
            }
        }
    }

    /// Parse already loaded input text and render the route between the
    /// configured markers
    ///
    /// # Errors
    ///
    /// Returns an error if the grid text is malformed or either marker is
    /// missing from the grid
    pub fn route_text(&self, input: &str) -> Result<String> {
        let body = if self.cli.skip_header() {
            strip_header(input)
        } else {
            input
        };

        let grid = Grid::parse(body)?;
        info!(
            "routing '{}' to '{}' on a {}x{} grid",
            self.cli.from,
            self.cli.to,
            grid.width(),
            grid.height()
        );

        let route = grid.route(self.cli.from, self.cli.to)?;
        Ok(route.to_string())
    }
}
