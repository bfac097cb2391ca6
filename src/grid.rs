use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;
use thiserror::Error;
use tracing::debug;

use crate::cell::Cell;
use crate::color::ColorRegistry;
use crate::location::Location;
use crate::shape::Side;

/// Conditions under which a puzzle is rejected before any variable is allocated.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[allow(missing_docs)]
pub enum ValidationError {
    #[error("the grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells but the first row has {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("the grid is {width} wide and {height} tall; a square grid is required")]
    NotSquare { width: usize, height: usize },
    #[error("color {symbol:?} marks {count} cells instead of exactly 2")]
    EndpointCount { symbol: char, count: usize },
    #[error("{location} lies outside the {width}x{height} grid")]
    OutOfBounds { location: Location, width: usize, height: usize },
}

/// Failure to turn a puzzle file into a [`Grid`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read puzzle file {}", .path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file was read but does not describe a valid puzzle.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// An immutable, validated puzzle: a rectangular array of [`Cell`]s and the [`ColorRegistry`] naming their colors.
///
/// A `Grid` can only be obtained through validation, so every value satisfies:
/// - at least one row and one column, all rows of equal length;
/// - every registered color marks exactly two endpoint cells.
///
/// Grids are usually parsed from text (see [`Grid::from_rows`]) or assembled with a [`GridBuilder`](crate::builder::GridBuilder).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    // row major
    cells: Array2<Cell>,
    colors: ColorRegistry,
}

impl Grid {
    /// Check the endpoint counts of `cells` against `colors` and wrap them up.
    pub(crate) fn from_parts(cells: Array2<Cell>, colors: ColorRegistry) -> Result<Self, ValidationError> {
        if cells.is_empty() {
            return Err(ValidationError::Empty);
        }

        let counts = cells.iter()
            .filter_map(Cell::endpoint_color)
            .counts();

        for (index, symbol) in colors.iter() {
            let count = counts.get(&index).copied().unwrap_or(0);
            if count != 2 {
                return Err(ValidationError::EndpointCount { symbol, count });
            }
        }

        Ok(Self { cells, colors })
    }

    /// Parse a puzzle given one string per row.
    ///
    /// ASCII letters are endpoints, compared case-sensitively; any other character is an empty cell.
    /// Colors are indexed in order of first appearance, scanning rows top to bottom and each row left to right.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows.into_iter()
            .map(|row| row.as_ref().chars().collect_vec())
            .collect_vec();

        let width = match rows.first() {
            None => return Err(ValidationError::Empty),
            Some(first) if first.is_empty() => return Err(ValidationError::Empty),
            Some(first) => first.len(),
        };

        if let Some((row, found)) = rows.iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != width) {
            return Err(ValidationError::RaggedRow { row, expected: width, found });
        }

        let mut colors = ColorRegistry::default();
        let cells = rows.iter()
            .flatten()
            .map(|symbol| match symbol.is_ascii_alphabetic() {
                true => Cell::Endpoint { color: colors.register(*symbol) },
                false => Cell::Empty,
            })
            .collect_vec();

        let cells = Array2::from_shape_fn((rows.len(), width), |(row, col)| cells[row * width + col]);
        let grid = Self::from_parts(cells, colors)?;
        debug!(width = grid.width(), height = grid.height(), colors = grid.colors.len(), "parsed puzzle");

        Ok(grid)
    }

    /// Read and parse the puzzle file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(text.parse()?)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// The colors used by this puzzle.
    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    /// Whether `location` lies on this grid.
    pub fn contains(&self, location: Location) -> bool {
        location.row < self.height() && location.col < self.width()
    }

    /// The cell at `location`, or [`None`] if it lies off the grid.
    pub fn cell(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    /// Every cell with its location, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        self.cells.indexed_iter().map(|(index, cell)| (Location::from(index), *cell))
    }

    /// The in-grid neighbors of `location`, in canonical [`Side`] order.
    pub fn neighbors_of(&self, location: Location) -> impl Iterator<Item = (Side, Location)> + '_ {
        Side::VARIANTS.iter()
            .map(move |side| (*side, side.attempt_from(location)))
            .filter(move |(_, neighbor)| self.contains(*neighbor))
    }

    /// The sides of `location` which have an in-grid neighbor, in canonical order.
    pub fn open_sides(&self, location: Location) -> Vec<Side> {
        self.neighbors_of(location).map(|(side, _)| side).collect_vec()
    }
}

impl FromStr for Grid {
    type Err = ValidationError;

    /// Parse one row per line; trailing blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().collect_vec();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        Self::from_rows(lines)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.height() * (self.width() + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(match cell {
                    Cell::Endpoint { color } => self.colors.symbol(*color).unwrap_or('?'),
                    Cell::Empty => '.',
                });
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
