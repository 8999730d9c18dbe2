//! Dijkstra maps ("flow fields").
//!
//! A [`DijkstraMap`] stores, for every cell, the number of 8-connected
//! passable hops to the nearest target. Ranks are found by repeated
//! relaxation sweeps until nothing changes; each sweep walks the grid in
//! row-major order and in its mirror image at once, so information travels
//! both ways per pass. Ranks only
//! ever decrease and are bounded by zero, so the sweeps terminate.

use gridmap_core::{Direction, Grid, Point, Range, points};

use crate::map::Map;

/// Rank of a target cell.
pub const MIN_RANK: u32 = 0;

/// Rank of a cell no target can reach (or that is not passable).
pub const MAX_RANK: u32 = u32::MAX - 2;

/// Precomputed distance-to-target field supporting greedy descent.
///
/// Independent of the map it was computed from: recompute it when
/// passability changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DijkstraMap {
    ranks: Grid<u32>,
    rc: Range,
}

impl DijkstraMap {
    /// Compute ranks over `rc` for the given `targets`.
    ///
    /// Targets outside `rc` are ignored. Targets keep rank 0 whether or not
    /// they are passable; every other cell is relaxed only if `passable`
    /// says so.
    pub fn compute(
        rc: Range,
        targets: &[Point],
        mut passable: impl FnMut(Point) -> bool,
    ) -> Self {
        let mut dm = Self {
            ranks: Grid::new(rc.width(), rc.height()),
            rc,
        };
        dm.ranks.fill(|| MAX_RANK);
        for &pt in targets {
            dm.ranks.set(pt - rc.min, MIN_RANK);
        }

        let (w, h) = (rc.width(), rc.height());
        let dirs = points(&Direction::ALL);
        let mut changed = true;
        let mut sweeps = 0usize;

        while changed {
            changed = false;
            sweeps += 1;

            for y in 0..h {
                for x in 0..w {
                    for local in [Point::new(x, y), Point::new(w - 1 - x, h - 1 - y)] {
                        let pt = local + rc.min;
                        if !passable(pt) {
                            continue;
                        }

                        let Some(&srank) = dm.ranks.get(local) else {
                            continue;
                        };
                        let (_, lrank) = dm.lowest(pt, &dirs);
                        if srank > lrank + 1 {
                            dm.ranks.set(local, lrank + 1);
                            changed = true;
                        }
                    }
                }
            }
        }

        log::debug!(
            "dijkstra: {} targets over {} settled after {sweeps} sweeps",
            targets.len(),
            rc
        );
        dm
    }

    /// The covered rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.rc
    }

    /// Rank at `p`, or `None` if `p` is outside the field.
    #[inline]
    pub fn rank(&self, p: Point) -> Option<u32> {
        self.ranks.get(p - self.rc.min).copied()
    }

    /// Whether some target can be reached from `p`.
    pub fn is_reached(&self, p: Point) -> bool {
        self.rank(p).is_some_and(|r| r < MAX_RANK)
    }

    /// Row-major iterator over `(Point, rank)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        let origin = self.rc.min;
        self.ranks.iter().map(move |(p, r)| (p + origin, *r))
    }

    /// One step of greedy descent: the neighbour of `src` (among `dirs`,
    /// first wins on ties) with the lowest rank, provided that rank is
    /// strictly below the rank of `src`.
    ///
    /// Returns `None` when `src` is outside the field or no neighbour
    /// improves on it.
    pub fn get_target(&self, src: Point, dirs: &[Point]) -> Option<Point> {
        let own = self.rank(src)?;
        match self.lowest(src, dirs) {
            (Some(p), rank) if rank < own => Some(p),
            _ => None,
        }
    }

    /// Follow [`get_target`](Self::get_target) from `src` until no step
    /// improves. The returned points exclude `src`; the last one is a target
    /// whenever `src` is reached.
    pub fn descend(&self, src: Point, dirs: &[Point]) -> Vec<Point> {
        let mut steps = Vec::new();
        let mut cur = src;
        while let Some(next) = self.get_target(cur, dirs) {
            steps.push(next);
            cur = next;
        }
        steps
    }

    /// The compass [`Direction`] of the step [`get_target`](Self::get_target)
    /// would take from `src`, if that step is a unit move.
    pub fn get_direction(&self, src: Point, dirs: &[Point]) -> Option<Direction> {
        let next = self.get_target(src, dirs)?;
        Direction::from_delta(next - src)
    }

    fn lowest(&self, src: Point, dirs: &[Point]) -> (Option<Point>, u32) {
        let mut best = None;
        let mut rank = MAX_RANK;
        for &d in dirs {
            let p = src + d;
            let Some(r) = self.rank(p) else {
                continue;
            };
            if r < rank {
                best = Some(p);
                rank = r;
            }
        }
        (best, rank)
    }
}

impl<T> Map<T> {
    /// Compute a [`DijkstraMap`] over this map's range.
    ///
    /// `passable` is asked about each cell (possibly many times) during
    /// relaxation.
    pub fn dijkstra_map(
        &self,
        targets: &[Point],
        mut passable: impl FnMut(Point, &T) -> bool,
    ) -> DijkstraMap {
        DijkstraMap::compute(self.rc, targets, |p| {
            self.get(p).is_some_and(|v| passable(p, v))
        })
    }
}
