//! A hexagonal grid in offset coordinates, with searches for weighted paths
//! and for every cell reachable within a cost budget.
//!
//! Rows alternate their horizontal offset: odd rows sit half a cell to the
//! right of even rows. Movement costs come from a caller-supplied function of
//! the cell being left and the cell being entered; a negative cost marks the
//! move as impossible.

extern crate best;
extern crate grid_2d;
#[macro_use]
extern crate log;
extern crate num_traits;
#[cfg(feature = "serialize")]
extern crate serde;

mod astar;
mod config;
mod dijkstra;
mod error;
mod grid;
mod metadata;
mod neighbours;
mod path;
mod range;
mod search;

pub use astar::*;
pub use config::*;
pub use error::*;
pub use grid::*;
pub use metadata::*;
pub use neighbours::*;
pub use range::*;
pub use search::*;

pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
