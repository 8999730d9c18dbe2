//! Spatial algorithms for dense 2D tile grids.
//!
//! [`Map`] wraps a [`Grid`](gridmap_core::Grid) of arbitrary payload and runs
//! every algorithm through caller-supplied callbacks:
//!
//! - **Neighbour iteration** ([`Map::neighbours`])
//! - **Best-first path search** ([`Map::path`])
//! - **DDA ray casting** and line of sight ([`Map::cast_ray`], [`Map::line_of_sight`])
//! - **Recursive shadow casting** field of view ([`Map::cast_shadow`])
//! - **Bresenham line walking** ([`Map::line`])
//! - **Dijkstra flow fields** ([`Map::dijkstra_map`], [`DijkstraMap`])
//!
//! Callbacks run inline on the caller's thread and steer early termination by
//! returning `false`. Nothing here synchronises: a `Map` must not be mutated
//! while one of its algorithms is running.
//!
//! ```
//! use gridmap::{Direction, Map, Point, Range, manhattan, points};
//!
//! let mut map = Map::<bool>::new(Range::new(0, 0, 5, 5));
//! map.set(Point::new(2, 1), true); // wall
//!
//! let path = map.path(
//!     Point::new(1, 1),
//!     Point::new(3, 1),
//!     &points(&Direction::CARDINAL),
//!     manhattan,
//!     |_, d, wall| (!*wall).then_some(d),
//! );
//! assert_eq!(path.map(|p| p.len()), Some(5));
//! ```

mod astar;
mod dijkstra;
mod line;
mod map;
mod path;
mod pqueue;
mod ray;
mod shadow;

pub use dijkstra::{DijkstraMap, MAX_RANK, MIN_RANK};
pub use map::Map;
pub use path::Path;
pub use pqueue::Frontier;

pub use gridmap_core::{
    Direction, Distance, Grid, GridError, Point, Range, chebyshev, euclidean, manhattan, points,
};
