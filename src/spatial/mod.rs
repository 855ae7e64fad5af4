//! Spatial data structures for character grids
//!
//! This module contains:
//! - Cell coordinates and unit moves
//! - The grid value with its feature store

/// Feature store, cell queries and the dense cell view
pub mod grid;
/// Coordinates and axis-aligned directions
pub mod position;

pub use grid::Grid;
pub use position::{Direction, Position};
