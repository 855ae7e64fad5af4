//! Grid text format constants and command-line defaults

// Text format
/// Marker for a cell that holds no feature
pub const EMPTY_MARKER: char = '-';
/// Separator between grid rows in text form
pub const ROW_DELIMITER: char = '\n';

// Routing endpoints used when none are given on the command line
/// Default start marker ("me")
pub const DEFAULT_FROM_MARKER: char = 'm';
/// Default destination marker ("point")
pub const DEFAULT_TO_MARKER: char = 'p';

/// Line terminator appended after every route instruction
pub const INSTRUCTION_TERMINATOR: char = '\n';
