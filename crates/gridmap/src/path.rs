//! Transient search paths.
//!
//! A [`Path`] is a persistent parent-linked list: forking shares the prefix
//! with the parent, so every frontier entry costs one node regardless of how
//! long its path is.

use std::rc::Rc;

use gridmap_core::Point;

#[derive(Debug)]
struct Link {
    point: Point,
    parent: Option<Rc<Link>>,
    len: usize,
}

/// An ordered sequence of points from a search origin, plus its cumulative
/// cost.
#[derive(Debug, Clone, Default)]
pub struct Path {
    head: Option<Rc<Link>>,
    cost: f64,
}

impl Path {
    /// An empty path with zero cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |l| l.len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Cumulative cost.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The frontier point, if any.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.head.as_ref().map(|l| l.point)
    }

    /// Extend this path by `pt`, adding `increment` to the cost. Forking an
    /// empty path seeds a one-point path whose cost is `increment`.
    pub fn fork(&self, pt: Point, increment: f64) -> Path {
        let len = self.len() + 1;
        Path {
            head: Some(Rc::new(Link {
                point: pt,
                parent: self.head.clone(),
                len,
            })),
            cost: self.cost + increment,
        }
    }

    /// The points from origin to frontier.
    pub fn points(&self) -> Vec<Point> {
        let mut rv = Vec::with_capacity(self.len());
        let mut cur = self.head.as_deref();
        while let Some(link) = cur {
            rv.push(link.point);
            cur = link.parent.as_deref();
        }
        rv.reverse();
        rv
    }
}
