//! Grid coordinates and unit moves between them

use std::fmt;

/// Cell coordinate within a grid, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Create a position from column and row indices
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Column index
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Row index
    pub const fn y(&self) -> usize {
        self.y
    }

    /// Position one cell away in the given direction
    ///
    /// Returns `None` when the move would leave the non-negative quadrant.
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned unit move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards higher rows
    Down,
    /// Towards column 0
    Left,
    /// Towards higher columns
    Right,
}

impl Direction {
    /// Column and row change caused by this move
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Instruction word for this move
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
