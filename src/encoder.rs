use itertools::Itertools;
use tracing::debug;

use crate::cell::Cell;
use crate::clause::{ClauseList, Encoding};
use crate::grid::{Grid, ValidationError};
use crate::logic::{at_most_one, exactly_one};
use crate::variables::{ColorVariables, DirectionVariables};

/// Knobs for [`GridEncoder`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EncoderConfig {
    /// Reject grids whose width and height differ with [`ValidationError::NotSquare`].
    ///
    /// The clauses themselves are well defined on any rectangle, so turning this off only widens the accepted input.
    pub require_square: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { require_square: true }
    }
}

impl EncoderConfig {
    /// Accept rectangular grids as well as square ones.
    pub fn rectangular() -> Self {
        Self { require_square: false }
    }
}

/// Encodes one [`Grid`] as CNF such that satisfying assignments are exactly the puzzle's solutions.
/// Use [`Self::encode`] to produce both clause groups.
///
/// Variables are allocated when the encoder is constructed and stay fixed for its lifetime.
pub struct GridEncoder<'a> {
    grid: &'a Grid,
    color_vars: ColorVariables,
    direction_vars: DirectionVariables,
}

impl<'a> GridEncoder<'a> {
    /// Validate `grid` against `config` and allocate its variables.
    ///
    /// Nothing is allocated if validation fails.
    pub fn new(grid: &'a Grid, config: EncoderConfig) -> Result<Self, ValidationError> {
        if config.require_square && !grid.is_square() {
            return Err(ValidationError::NotSquare {
                width: grid.width(),
                height: grid.height(),
            });
        }

        let color_vars = ColorVariables::for_grid(grid);
        // direction ids start right above the color block so the families never collide
        let direction_vars = DirectionVariables::allocate(grid, color_vars.first_free());

        Ok(Self { grid, color_vars, direction_vars })
    }

    /// The color variable indexer for this grid.
    pub fn color_variables(&self) -> &ColorVariables {
        &self.color_vars
    }

    /// The direction variables allocated for this grid.
    pub fn direction_variables(&self) -> &DirectionVariables {
        &self.direction_vars
    }

    /// Emit every clause for this grid.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn encode(&self) -> Encoding {
        let color_clauses = self.color_clauses();
        let direction_clauses = self.direction_clauses();
        debug!(
            color_clauses = color_clauses.len(),
            direction_clauses = direction_clauses.len(),
            "encoded grid"
        );

        Encoding {
            color_clauses,
            direction_clauses,
            color_variable_count: self.color_vars.count(),
            direction_variable_count: self.direction_vars.count(),
        }
    }

    /// Clauses fixing endpoint colors and giving every other cell exactly one color.
    ///
    /// # Logical setup
    /// Let V be a cell.
    ///
    /// If V is an endpoint of color C, V has color C and no other color.
    /// Exactly one in-grid neighbor of V also has color C; this is the neighbor through which the flow leaves the endpoint.
    ///
    /// Otherwise, V has exactly one color, which is not yet known.
    pub fn color_clauses(&self) -> ClauseList {
        let mut clauses = ClauseList::default();
        let colors = self.grid.colors();

        for (location, cell) in self.grid.cells() {
            // let this cell be V
            match cell {
                Cell::Endpoint { color } => {
                    // V has its assigned color...
                    clauses.push(vec![self.color_vars.var(location, color).positive()]);

                    // and no other
                    clauses.extend(colors.indices()
                        .filter(|other| *other != color)
                        .map(|other| vec![self.color_vars.var(location, other).negative()]));

                    let same_colored = self.grid.neighbors_of(location)
                        .map(|(_, neighbor)| self.color_vars.var(neighbor, color))
                        .collect_vec();

                    // at least one neighbor shares the color of V
                    clauses.push(same_colored.iter().map(|var| var.positive()).collect_vec());
                    // but no two of them do
                    clauses.extend(at_most_one(&same_colored));
                }
                Cell::Empty => {
                    clauses.extend(exactly_one(
                        &colors.indices()
                            .map(|color| self.color_vars.var(location, color))
                            .collect_vec()
                    ));
                }
            }
        }

        clauses
    }

    /// Clauses choosing one direction type per non-endpoint cell and tying neighbor colors to that choice.
    ///
    /// # Logical setup
    /// Let A be a non-endpoint cell. A has exactly one of its feasible direction types.
    ///
    /// For every color C, every in-grid neighbor B of A, and every feasible direction type S of A,
    /// let X = (A has type S), Y = (A has color C), Z = (B has color C).
    ///
    /// If S leaves A towards B, then X => (Y <=> Z), which is `(!X + !Y + Z) * (!X + Y + !Z)`.
    /// Otherwise X => !(Y * Z), which is `!X + !Y + !Z`; a flow never touches a same-colored cell it does not pass into.
    pub fn direction_clauses(&self) -> ClauseList {
        let mut clauses = ClauseList::default();
        let colors = self.grid.colors();

        for (location, directions) in self.direction_vars.iter() {
            // A has exactly one shape
            clauses.extend(exactly_one(&directions.iter().map(|(_, var)| *var).collect_vec()));

            for color in colors.indices() {
                let y = self.color_vars.var(location, color);

                // every side with a neighbor, including sides no feasible type covers
                for (side, neighbor) in self.grid.neighbors_of(location) {
                    let z = self.color_vars.var(neighbor, color);

                    for (direction, x) in directions {
                        if direction.covers(side) {
                            clauses.push(vec![x.negative(), y.negative(), z.positive()]);
                            clauses.push(vec![x.negative(), y.positive(), z.negative()]);
                        } else {
                            clauses.push(vec![x.negative(), y.negative(), z.negative()]);
                        }
                    }
                }
            }
        }

        clauses
    }
}

/// Shorthand for [`GridEncoder::new`] followed by [`GridEncoder::encode`].
pub fn encode(grid: &Grid, config: EncoderConfig) -> Result<Encoding, ValidationError> {
    Ok(GridEncoder::new(grid, config)?.encode())
}
