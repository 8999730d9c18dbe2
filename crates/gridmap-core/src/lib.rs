//! **gridmap-core**: building blocks for tile-grid algorithms.
//!
//! This crate provides the vocabulary shared by the *gridmap* algorithms:
//! integer geometry ([`Point`], [`Range`]), the dense [`Grid`] container that
//! holds one payload value per cell, compass [`Direction`]s and the distance
//! metrics used to score movement between cells.

pub mod dirs;
pub mod distance;
pub mod error;
pub mod geom;
pub mod grid;

pub use dirs::{Direction, points};
pub use distance::{Distance, chebyshev, euclidean, manhattan};
pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, GridIter};
