use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A grid extent; grids always have at least one row and one column.
pub type Dimension = NonZero<Coord>;

/// A cell position `(row, col)` on a grid. The top left corner is `Location { row: 0, col: 0 }`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location {
    /// Zero-based row, counted from the top.
    pub row: Coord,
    /// Zero-based column, counted from the left.
    pub col: Coord,
}

impl Location {
    /// Shorthand for `Location { row, col }`.
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.row, self.col)
    }

    // wraps below zero; callers bounds-check the result against the grid
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self {
            row: self.row.wrapping_add_signed(rhs.0),
            col: self.col.wrapping_add_signed(rhs.1),
        }
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
