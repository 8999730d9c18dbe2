//! Compass directions and their unit displacements.
//!
//! Traversals are parameterised by a list of displacements rather than a
//! fixed connectivity, so callers pick 4-way, 8-way or a custom order with
//! [`points`]:
//!
//! ```
//! use gridmap_core::{Direction, Point, points};
//!
//! let four = points(&Direction::CARDINAL);
//! assert_eq!(four[0], Point::new(0, -1));
//! ```

use std::fmt;
use std::ops::Add;

use crate::geom::Point;

/// One of the eight compass directions. North is up (negative Y).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const UP: Self = Self::North;
    pub const RIGHT: Self = Self::East;
    pub const DOWN: Self = Self::South;
    pub const LEFT: Self = Self::West;
    pub const UP_LEFT: Self = Self::NorthWest;
    pub const UP_RIGHT: Self = Self::NorthEast;
    pub const DOWN_RIGHT: Self = Self::SouthEast;
    pub const DOWN_LEFT: Self = Self::SouthWest;

    /// The four cardinal directions, clockwise from north.
    pub const CARDINAL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The four diagonal directions, clockwise from north-west.
    pub const DIAGONAL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// All eight directions, clockwise from north-west.
    pub const ALL: [Self; 8] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
    ];

    /// Unit displacement of this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::East => Point::new(1, 0),
            Self::South => Point::new(0, 1),
            Self::West => Point::new(-1, 0),
            Self::NorthWest => Point::new(-1, -1),
            Self::NorthEast => Point::new(1, -1),
            Self::SouthEast => Point::new(1, 1),
            Self::SouthWest => Point::new(-1, 1),
        }
    }

    /// The direction whose displacement is exactly `d`, if any.
    pub fn from_delta(d: Point) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }

    /// The geometrically opposite direction.
    #[inline]
    pub const fn invert(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }

    #[inline]
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
            Self::NorthWest => "NW",
            Self::NorthEast => "NE",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
        };
        f.write_str(s)
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    #[inline]
    fn add(self, d: Direction) -> Point {
        self + d.delta()
    }
}

/// Displacements for the given directions, in the requested order.
pub fn points(dirs: &[Direction]) -> Vec<Point> {
    dirs.iter().map(|d| d.delta()).collect()
}
