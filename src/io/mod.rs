//! Text input/output, configuration and error handling

/// Command-line wrapper feeding text into the grid and printing routes
pub mod cli;
/// Format constants and command-line defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Grid text parsing and validation
pub mod parse;
/// Grid text rendering
pub mod render;
