#![warn(missing_docs)]

//! # `flowcnf`
//!
//! A Boolean satisfiability (SAT) encoder for [Numberlink](https://en.wikipedia.org/wiki/Numberlink) as posited in the mobile game Flow Free.
//! Begin by obtaining a [`Grid`], either by parsing puzzle text (`"R.B\n...\nR.B".parse()`) or with a [`GridBuilder`].
//! Then call [`encode`] to get an [`Encoding`], which can be written out with [`dimacs::write_dimacs`] or handed to a solver through [`Encoding::to_formula`].
//! Solving the formula and interpreting a model are left to the caller.
//!
//! # Internals
//! The encoding follows [Matt Zucker's "path shape" formulation](https://mzucker.github.io/2016/09/02/eating-sat-flavored-crow.html), which is sufficient for square boards free of bridges and warps.
//!
//! There are two families of variables:
//! 1. A color variable for every cell C and color K, true when C holds K.
//! 2. A direction variable for every non-endpoint cell C and every [`DirectionType`] T which fits at C, true when the flow through C has shape T.
//!
//! We make the following assertions in SAT form:
//! 1. Every endpoint has its own color and no other, and exactly one of its neighbors shares that color.
//! 2. Every other cell has exactly one color and exactly one direction type.
//! 3. A cell's direction type decides which neighbors share its color: those on the two sides the type covers do, all others do not.
//!
//! Since every non-endpoint cell connects exactly two same-colored neighbors and every endpoint exactly one, each color forms a path between its endpoints.
//! Like the "path shape" formulation it extends, this does not forbid a separate closed loop of one color; such loops are rare in practice.

pub use builder::GridBuilder;
pub use cell::Cell;
pub use clause::{Clause, ClauseList, Encoding};
pub use color::{ColorIndex, ColorRegistry};
pub use encoder::{encode, EncoderConfig, GridEncoder};
pub use grid::{Grid, LoadError, ValidationError};
pub use location::{Dimension, Location};
pub use shape::{DirectionType, Side};

pub mod builder;
pub(crate) mod cell;
pub mod clause;
pub(crate) mod color;
pub mod dimacs;
pub mod encoder;
pub(crate) mod grid;
pub(crate) mod location;
pub mod logic;
pub mod render;
pub(crate) mod shape;
pub mod variables;
