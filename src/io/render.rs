//! Grid text rendering
//!
//! Produces `height` rows of `width` characters joined by newlines, without a
//! trailing newline. Parsing the output gives back the same cell contents.

use std::fmt::{self, Write};

use crate::io::configuration::ROW_DELIMITER;
use crate::spatial::grid::Grid;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width() == 0 {
            return Ok(());
        }

        let cells = self.cells();
        for (y, row) in cells.rows().into_iter().enumerate() {
            if y > 0 {
                f.write_char(ROW_DELIMITER)?;
            }
            for &cell in row {
                f.write_char(cell)?;
            }
        }

        Ok(())
    }
}
