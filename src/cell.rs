use crate::color::ColorIndex;

/// The content of one grid cell as given by the puzzle.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// A flow endpoint with a fixed color.
    Endpoint {
        /// Dense index of the endpoint's color in the grid's [`ColorRegistry`](crate::ColorRegistry).
        color: ColorIndex,
    },
    /// A cell whose color the solver must choose.
    #[default]
    Empty,
}

impl Cell {
    /// The fixed color of this cell, if it is an endpoint.
    pub fn endpoint_color(&self) -> Option<ColorIndex> {
        match self {
            Cell::Endpoint { color } => Some(*color),
            Cell::Empty => None,
        }
    }

    /// Shorthand for `self.endpoint_color().is_some()`.
    pub fn is_endpoint(&self) -> bool {
        matches!(self, Cell::Endpoint { .. })
    }
}
