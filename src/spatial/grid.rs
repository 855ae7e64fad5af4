//! Grid value holding named single-character features
//!
//! A grid has fixed dimensions and a map from marker character to the cell it
//! occupies. Cells without a feature read back as the empty marker. Text
//! parsing and rendering live in `io::parse` and `io::render`; routing lives
//! in `routing::route`.

use std::collections::HashMap;

use ndarray::Array2;

use crate::io::configuration::EMPTY_MARKER;
use crate::spatial::position::Position;

/// Rectangular character grid with features keyed by marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    features: HashMap<char, Position>,
}

impl Grid {
    /// Create an empty grid with the given dimensions
    ///
    /// A zero in either dimension collapses both to zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_features(width, height, HashMap::new())
    }

    /// Create a grid from dimensions and an already collected feature map
    pub(crate) fn with_features(
        width: usize,
        height: usize,
        features: HashMap<char, Position>,
    ) -> Self {
        let (width, height) = if width == 0 || height == 0 {
            (0, 0)
        } else {
            (width, height)
        };

        Self {
            width,
            height,
            features,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Marker occupying the cell at `(x, y)`, or the empty marker
    ///
    /// Scans every feature. When several markers share a cell the first one
    /// met in map iteration order is returned.
    pub fn get(&self, x: usize, y: usize) -> char {
        let target = Position::new(x, y);
        self.features
            .iter()
            .find(|&(_, &position)| position == target)
            .map_or(EMPTY_MARKER, |(&marker, _)| marker)
    }

    /// Place `marker` at `(x, y)`, moving it if already present
    ///
    /// Bounds are not checked against the grid dimensions.
    pub fn set(&mut self, x: usize, y: usize, marker: char) {
        self.features.insert(marker, Position::new(x, y));
    }

    /// Position of the feature carrying `marker`
    pub fn feature(&self, marker: char) -> Option<Position> {
        self.features.get(&marker).copied()
    }

    /// Iterate over all `(marker, position)` pairs in unspecified order
    pub fn features(&self) -> impl Iterator<Item = (char, Position)> + '_ {
        self.features
            .iter()
            .map(|(&marker, &position)| (marker, position))
    }

    /// Number of stored features
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Dense `height x width` view of the grid contents
    ///
    /// Features outside the grid bounds are left out. Shared cells resolve
    /// to the same marker `get` would return.
    pub fn cells(&self) -> Array2<char> {
        let mut cells = Array2::from_elem((self.height, self.width), EMPTY_MARKER);
        for (&marker, position) in &self.features {
            if let Some(cell) = cells.get_mut([position.y(), position.x()]) {
                if *cell == EMPTY_MARKER {
                    *cell = marker;
                }
            }
        }
        cells
    }
}
