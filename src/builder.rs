use std::num::NonZero;

use ndarray::{Array2, AssignElem};

use crate::cell::Cell;
use crate::color::ColorRegistry;
use crate::grid::{Grid, ValidationError};
use crate::location::{Dimension, Location};

/// Assembles a [`Grid`] programmatically instead of parsing puzzle text.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once an operation fails, the builder is invalid: later operations do nothing and [`Self::build`] reports the first failure.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    colors: ColorRegistry,
    invalid_reason: Option<ValidationError>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
    }
}

impl GridBuilder {
    /// An empty grid `dims.0` cells wide and `dims.1` cells tall.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
            colors: Default::default(),
            invalid_reason: None,
        }
    }

    fn check_bounds(&mut self, location: Location) -> bool {
        if location.row < self.dims.1.get() && location.col < self.dims.0.get() {
            return true;
        }

        self.invalid_reason = Some(ValidationError::OutOfBounds {
            location,
            width: self.dims.0.get(),
            height: self.dims.1.get(),
        });
        false
    }

    /// Place both endpoints of the color shown as `symbol`. The order of `locations` does not matter.
    ///
    /// Colors are indexed in the order they are first added.
    /// Reusing a symbol, or placing an endpoint over another one, is not rejected here but makes [`Self::build`] fail.
    pub fn add_endpoints(&mut self, symbol: char, locations: (Location, Location)) -> &mut Self {
        if self.invalid_reason.is_some() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if !self.check_bounds(location) {
                return self;
            }
        }

        let color = self.colors.register(symbol);
        for location in [locations.0, locations.1] {
            self.cells[location.as_index()] = Cell::Endpoint { color };
        }

        self
    }

    /// Remove the most recently added color and clear its endpoints.
    ///
    /// If the builder is invalid or holds no colors, this does nothing.
    pub fn pop_endpoints(&mut self) -> &mut Self {
        if self.invalid_reason.is_some() {
            return self;
        }

        let to_remove = self.colors.len().checked_sub(1);
        if let (Some(to_remove), Some(_)) = (to_remove, self.colors.pop()) {
            self.cells.map_inplace(|cell| {
                if cell.endpoint_color() == Some(to_remove) {
                    cell.assign_elem(Cell::Empty);
                }
            });
        }

        self
    }

    /// The failure that invalidated this builder, if any.
    pub fn invalid_reason(&self) -> Option<&ValidationError> {
        self.invalid_reason.as_ref()
    }

    /// Validate the current state and produce a [`Grid`].
    pub fn build(&self) -> Result<Grid, ValidationError> {
        if let Some(reason) = &self.invalid_reason {
            return Err(reason.clone());
        }

        Grid::from_parts(self.cells.clone(), self.colors.clone())
    }
}
