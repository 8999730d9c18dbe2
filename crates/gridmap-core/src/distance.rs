//! Distance metrics between grid points.
//!
//! All metrics return `f64` so they can feed scalar path costs directly.

use crate::geom::Point;

/// A distance-measurement function, as taken by path search.
pub type Distance = fn(Point, Point) -> f64;

/// Euclidean (straight-line) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    f64::from((a.x - b.x).abs() + (a.y - b.y).abs())
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    f64::from((a.x - b.x).abs().max((a.y - b.y).abs()))
}
