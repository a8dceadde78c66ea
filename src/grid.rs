use crate::math::Point;
use std::fmt;

/// A rendered rectangle of the map, one character per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// The map coordinates of the top-left cell.
    origin: Point,
    /// The number of cells in each row.
    width: usize,
    /// The cells in row-major order, top row first.
    cells: Vec<char>,
}

impl Grid {
    pub(crate) fn new(origin: Point, width: usize, cells: Vec<char>) -> Self {
        debug_assert!(width > 0 && cells.len() % width == 0);
        Self {
            origin,
            width,
            cells,
        }
    }

    /// The map coordinates of the top-left cell.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Returns an iterator over the rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }

    /// Gets the character drawn at a map coordinate, if it is inside the grid.
    pub fn get(&self, point: Point) -> Option<char> {
        let col = usize::try_from(point.x.checked_sub(self.origin.x)?).ok()?;
        let row = usize::try_from(point.y.checked_sub(self.origin.y)?).ok()?;
        if col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
