//! Variable numbering for the two families of SAT variables.
//!
//! Color variables occupy a dense block starting at DIMACS id 1: one per `(cell, color)` pair.
//! Direction variables are allocated sequentially after that block, one per non-endpoint cell and direction type the cell can actually hold.

use itertools::Itertools;
use ndarray::Array2;
use tracing::debug;
use varisat::Var;

use crate::color::ColorIndex;
use crate::grid::Grid;
use crate::location::Location;
use crate::shape::DirectionType;

/// The variable stating "the cell at `location` has color `color`".
///
/// Its DIMACS id is `(row * width + col) * num_colors + color + 1`, so ids for a grid cover exactly `1..=cells * num_colors` without gaps or repeats.
/// `width` is the row length, which is the side length `N` on square grids.
pub fn color_var(location: Location, color: ColorIndex, width: usize, num_colors: usize) -> Var {
    Var::from_index((location.row * width + location.col) * num_colors + color)
}

/// [`color_var`] bound to the shape of one [`Grid`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColorVariables {
    width: usize,
    cells: usize,
    num_colors: usize,
}

impl ColorVariables {
    /// Index the color variables of `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            cells: grid.cell_count(),
            num_colors: grid.colors().len(),
        }
    }

    /// See [`color_var`].
    #[inline]
    pub fn var(&self, location: Location, color: ColorIndex) -> Var {
        color_var(location, color, self.width, self.num_colors)
    }

    /// The number of color variables, which is also the highest color variable id.
    pub fn count(&self) -> usize {
        self.cells * self.num_colors
    }

    /// The first variable above the color block; direction allocation must start here or later.
    pub fn first_free(&self) -> Var {
        Var::from_index(self.count())
    }
}

/// Direction variables for every non-endpoint cell, allocated in row-major order and, within a cell, in [`DirectionType`] canonical order.
///
/// Only feasible direction types get a variable: a type is feasible when both sides it covers have an in-grid neighbor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectionVariables {
    // None for endpoints
    by_cell: Array2<Option<Vec<(DirectionType, Var)>>>,
    first: Var,
    count: usize,
}

impl DirectionVariables {
    /// Allocate ids for `grid` sequentially, the first one being `first`.
    ///
    /// The same grid and `first` always produce the same ids.
    pub fn allocate(grid: &Grid, first: Var) -> Self {
        let mut next = first.index();
        let mut by_cell = Array2::from_elem((grid.height(), grid.width()), None);

        // grid.cells() is row major, which fixes the numbering
        for (location, _) in grid.cells().filter(|(_, cell)| !cell.is_endpoint()) {
            let open_sides = grid.open_sides(location);
            let vars = DirectionType::feasible_with(&open_sides)
                .map(|direction| {
                    let var = Var::from_index(next);
                    next += 1;
                    (direction, var)
                })
                .collect_vec();

            by_cell[location.as_index()] = Some(vars);
        }

        let count = next - first.index();
        debug!(first = first.to_dimacs(), count, "allocated direction variables");

        Self { by_cell, first, count }
    }

    /// The number of direction variables allocated.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The highest variable id in use once these variables exist, i.e. the id just below the next free one.
    ///
    /// When nothing was allocated this is the id just below `first`.
    pub fn last_id(&self) -> usize {
        self.first.index() + self.count
    }

    /// The `(direction type, variable)` pairs of the non-endpoint cell at `location`, or [`None`] for endpoints and off-grid locations.
    pub fn of(&self, location: Location) -> Option<&[(DirectionType, Var)]> {
        self.by_cell.get(location.as_index())
            .and_then(Option::as_deref)
    }

    /// The variable for `direction` at `location`, if that direction type is feasible there.
    pub fn get(&self, location: Location, direction: DirectionType) -> Option<Var> {
        self.of(location)?
            .iter()
            .find(|(candidate, _)| *candidate == direction)
            .map(|(_, var)| *var)
    }

    /// All non-endpoint cells with their variables, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &[(DirectionType, Var)])> + '_ {
        self.by_cell.indexed_iter()
            .filter_map(|(index, vars)| vars.as_deref().map(|vars| (Location::from(index), vars)))
    }
}
