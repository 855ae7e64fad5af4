//! Grid text parsing with row validation
//!
//! Rows are separated by a single newline. Every row must be non-empty and
//! as long as the first one. Each character other than the empty marker
//! becomes a feature at its (column, row) cell; a marker seen twice keeps
//! its last position.

use std::collections::HashMap;
use std::str::FromStr;

use log::debug;

use crate::io::configuration::{EMPTY_MARKER, ROW_DELIMITER};
use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

impl Grid {
    /// Parse grid text into a grid
    ///
    /// Empty text yields an empty `0 x 0` grid. Columns are counted in
    /// `char`s, so a multi-byte character occupies a single cell.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A row is empty (`GridError::EmptyRow`)
    /// - A row differs in length from the first row (`GridError::InconsistentWidth`)
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::default());
        }

        let mut features = HashMap::new();
        let mut width = 0;
        let mut height = 0;

        for (y, row) in input.split(ROW_DELIMITER).enumerate() {
            let length = row.chars().count();
            if length == 0 {
                return Err(GridError::EmptyRow { index: y });
            }

            if y == 0 {
                width = length;
            } else if length != width {
                return Err(GridError::InconsistentWidth {
                    expected: width,
                    actual: length,
                });
            }

            for (x, marker) in row.chars().enumerate() {
                if marker != EMPTY_MARKER {
                    features.insert(marker, Position::new(x, y));
                }
            }

            height = y + 1;
        }

        debug!(
            "parsed {width}x{height} grid with {} features",
            features.len()
        );

        Ok(Self::with_features(width, height, features))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
