//! Straight-line routes between two features
//!
//! A route covers the horizontal displacement first and the vertical one
//! second, one instruction per cell. Obstacles are not considered.

use std::fmt::{self, Write};
use std::iter;

use log::debug;

use crate::io::configuration::INSTRUCTION_TERMINATOR;
use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::position::{Direction, Position};

/// Ordered sequence of unit moves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    steps: Vec<Direction>,
}

impl Route {
    /// Build the move sequence leading from `from` to `to`
    pub fn between(from: Position, to: Position) -> Self {
        let dx = to.x() as isize - from.x() as isize;
        let dy = to.y() as isize - from.y() as isize;

        let horizontal = if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        };
        let vertical = if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        };

        let steps = iter::repeat_n(horizontal, dx.unsigned_abs())
            .chain(iter::repeat_n(vertical, dy.unsigned_abs()))
            .collect();

        Self { steps }
    }

    /// Moves in travel order
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when start and destination coincide
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Direction;
    type IntoIter = std::slice::Iter<'a, Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            f.write_str(step.as_str())?;
            f.write_char(INSTRUCTION_TERMINATOR)?;
        }
        Ok(())
    }
}

impl Grid {
    /// Route from the feature `from` to the feature `to`
    ///
    /// # Errors
    ///
    /// Returns `GridError::FeatureNotFound` for the first of `from`, `to`
    /// that has no feature in the grid
    pub fn route(&self, from: char, to: char) -> Result<Route> {
        let start = self
            .feature(from)
            .ok_or(GridError::FeatureNotFound { marker: from })?;
        let end = self
            .feature(to)
            .ok_or(GridError::FeatureNotFound { marker: to })?;

        let route = Route::between(start, end);
        debug!("route {from}{start} -> {to}{end}: {} steps", route.len());

        Ok(route)
    }
}
