use strum::VariantArray;

use crate::location::Location;

/// The four grid-relative sides of a square cell.
///
/// [`Side::VARIANTS`] lists them in canonical order, which fixes the order in which neighbors are visited.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Side {
    /// The neighbor in the same row, one column to the left.
    Left,
    /// The neighbor in the same row, one column to the right.
    Right,
    /// The neighbor in the same column, one row up.
    Top,
    /// The neighbor in the same column, one row down.
    Bottom,
}

impl Side {
    /// Step from `location` across this side, without checking the result against any grid.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
            Self::Top => location.offset_by((-1, 0)),
            Self::Bottom => location.offset_by((1, 0)),
        }
    }
}

/// The six ways a flow can pass through a cell, each entering and leaving through exactly two of its [`Side`]s.
///
/// Variants are declared in canonical order; variable allocation and clause emission both follow [`DirectionType::VARIANTS`].
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum DirectionType {
    /// Straight through, left to right.
    LeftRight,
    /// Straight through, top to bottom.
    TopBottom,
    /// A turn joining the top and left sides.
    TopLeft,
    /// A turn joining the top and right sides.
    TopRight,
    /// A turn joining the bottom and left sides.
    BottomLeft,
    /// A turn joining the bottom and right sides.
    BottomRight,
}

impl DirectionType {
    /// The two sides this direction type connects.
    pub const fn sides(&self) -> [Side; 2] {
        match self {
            Self::LeftRight => [Side::Left, Side::Right],
            Self::TopBottom => [Side::Top, Side::Bottom],
            Self::TopLeft => [Side::Top, Side::Left],
            Self::TopRight => [Side::Top, Side::Right],
            Self::BottomLeft => [Side::Bottom, Side::Left],
            Self::BottomRight => [Side::Bottom, Side::Right],
        }
    }

    /// Whether a flow of this type leaves the cell through `side`.
    pub fn covers(&self, side: Side) -> bool {
        self.sides().contains(&side)
    }

    /// Whether both covered sides are among `open_sides`, i.e. the flow stays on the grid.
    pub fn possible_with(&self, open_sides: &[Side]) -> bool {
        self.sides().iter().all(|side| open_sides.contains(side))
    }

    /// The feasible subset of [`DirectionType::VARIANTS`] for a cell whose in-grid neighbors lie on `open_sides`, in canonical order.
    pub fn feasible_with(open_sides: &[Side]) -> impl Iterator<Item = Self> + '_ {
        Self::VARIANTS.iter()
            .copied()
            .filter(move |direction| direction.possible_with(open_sides))
    }
}
