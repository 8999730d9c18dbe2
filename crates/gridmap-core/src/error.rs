use thiserror::Error;

use crate::geom::{Point, Range};

/// Errors raised by grid construction and strict accessors.
///
/// Ordinary misses are reported through `Option`/`bool` returns; these
/// variants cover the call sites that need a reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid: out-of-bounds access at {point} (bounds {range})")]
    OutOfBounds { point: Point, range: Range },

    #[error("grid: expected {expected} cells, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
