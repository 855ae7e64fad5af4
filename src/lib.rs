//! Character grid parsing and straight-line routing between grid features
//!
//! A grid is read from text where `-` marks an empty cell and any other
//! character names a feature at that cell. Routes between two features are
//! emitted as `UP`/`DOWN`/`LEFT`/`RIGHT` instructions, horizontal moves first.

#![forbid(unsafe_code)]

/// Text input/output, configuration and error handling
pub mod io;
/// Route generation between features
pub mod routing;
/// Grid value and coordinates
pub mod spatial;

pub use io::error::{GridError, Result};
pub use routing::Route;
pub use spatial::{Direction, Grid, Position};
