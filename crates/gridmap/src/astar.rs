use gridmap_core::{Distance, Grid, Point};

use crate::map::Map;
use crate::path::Path;
use crate::pqueue::Frontier;

impl<T> Map<T> {
    /// Best-first path search from `src` to `dst`.
    ///
    /// `cost(p, dist(dst, p), value)` is asked for every candidate cell and
    /// returns `Some(increment)` when the cell is traversable. The search
    /// orders its frontier by the sum of increments, seeded with
    /// `dist(dst, src)`, so it behaves as A* when the callback folds a
    /// consistent heuristic into the increment and as uniform-cost search
    /// when it returns only edge costs.
    ///
    /// The first time a point is popped it is closed for good. With an
    /// inconsistent cost callback this can yield a suboptimal path.
    ///
    /// Returns the points from `src` to `dst` inclusive, or `None` if `src`
    /// is out of bounds, `dst` is missing or rejected by `cost`, or the
    /// frontier runs dry.
    pub fn path(
        &self,
        src: Point,
        dst: Point,
        dirs: &[Point],
        dist: Distance,
        mut cost: impl FnMut(Point, f64, &T) -> Option<f64>,
    ) -> Option<Vec<Point>> {
        if !self.contains(src) {
            log::trace!("path: source {src} outside {}", self.rc);
            return None;
        }
        let Some(goal) = self.get(dst) else {
            log::trace!("path: destination {dst} outside {}", self.rc);
            return None;
        };

        let tdist = dist(dst, src);
        if cost(dst, tdist, goal).is_none() {
            log::trace!("path: destination {dst} is not traversable");
            return None;
        }

        let size = self.size();
        let mut closed = Grid::<bool>::new(size.x, size.y);
        let mut closed_count = 0usize;
        let mut queue = Frontier::new();
        queue.push(Path::new().fork(src, tdist));

        while let Some(road) = queue.pop() {
            let Some(last) = road.last() else {
                continue;
            };

            match closed.get_mut(last - self.rc.min) {
                Some(seen) if !*seen => *seen = true,
                _ => continue,
            }
            closed_count += 1;

            if last == dst {
                return Some(road.points());
            }

            self.neighbours(last, dirs, |p, v| {
                if let Some(ncost) = cost(p, dist(dst, p), v) {
                    queue.push(road.fork(p, ncost));
                }
                true
            });
        }

        log::debug!("path: no route {src} -> {dst} after closing {closed_count} points");
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use gridmap_core::{Direction, Point, Range, chebyshev, euclidean, manhattan, points};

    use crate::map::Map;

    fn bordered(w: i32, h: i32) -> HashSet<Point> {
        Range::new(0, 0, w, h)
            .iter()
            .filter(|p| p.x == 0 || p.y == 0 || p.x == w - 1 || p.y == h - 1)
            .collect()
    }

    #[test]
    fn path_walls_and_detours() {
        let m = Map::<()>::new(Range::new(0, 0, 5, 5));
        let src = Point::new(1, 1);
        let dst = Point::new(3, 2);
        let dirs = points(&Direction::CARDINAL);
        let mut walls = bordered(5, 5);

        let find = |walls: &HashSet<Point>, src: Point, dst: Point| {
            m.path(src, dst, &dirs, manhattan, |p, d, _| {
                (!walls.contains(&p)).then_some(d)
            })
        };

        let p = find(&walls, src, dst).expect("clean map");
        assert_eq!(p.len(), 4);
        assert_eq!(p.first(), Some(&src));
        assert_eq!(p.last(), Some(&dst));

        walls.insert(Point::new(2, 1));
        assert_eq!(find(&walls, src, dst).map(|p| p.len()), Some(4));

        walls.insert(Point::new(2, 2));
        let p = find(&walls, src, dst).expect("detour");
        assert_eq!(p.len(), 6);
        assert!(!p.contains(&Point::new(2, 1)));
        assert!(!p.contains(&Point::new(2, 2)));

        walls.insert(Point::new(1, 3));
        assert!(find(&walls, src, dst).is_none());

        // out-of-bounds and unwalkable endpoints
        assert!(find(&walls, Point::new(10, 10), dst).is_none());
        assert!(find(&walls, src, Point::new(10, 10)).is_none());
        assert!(find(&walls, src, Point::new(4, 4)).is_none());
    }

    #[test]
    fn path_steps_are_adjacent() {
        let m = Map::<u8>::new(Range::new(0, 0, 8, 8));
        let dirs = points(&Direction::ALL);
        let p = m
            .path(Point::new(0, 0), Point::new(7, 3), &dirs, chebyshev, |_, _, _| {
                Some(1.0)
            })
            .expect("open map");
        assert_eq!(p.len(), 8);
        for w in p.windows(2) {
            assert_eq!(chebyshev(w[0], w[1]), 1.0);
        }
    }

    #[test]
    fn path_uniform_cost_is_shortest() {
        let mut m = Map::<bool>::new(Range::new(0, 0, 7, 7));
        for y in 0..6 {
            m.set(Point::new(3, y), true);
        }
        let dirs = points(&Direction::CARDINAL);
        let p = m
            .path(Point::new(0, 0), Point::new(6, 0), &dirs, euclidean, |_, _, wall| {
                (!*wall).then_some(1.0)
            })
            .expect("gap at the bottom");
        // down 6, across 6, up 6
        assert_eq!(p.len(), 19);
        assert!(p.contains(&Point::new(3, 6)));
    }

    #[test]
    fn path_to_self() {
        let m = Map::<()>::new(Range::new(0, 0, 3, 3));
        let p = m.path(
            Point::new(1, 1),
            Point::new(1, 1),
            &points(&Direction::CARDINAL),
            manhattan,
            |_, d, _| Some(d),
        );
        assert_eq!(p, Some(vec![Point::new(1, 1)]));
    }

    #[test]
    fn path_offset_map() {
        let m = Map::<()>::new(Range::new(-5, -5, 0, 0));
        let p = m
            .path(
                Point::new(-5, -5),
                Point::new(-1, -1),
                &points(&Direction::CARDINAL),
                manhattan,
                |_, _, _| Some(1.0),
            )
            .expect("open map");
        assert_eq!(p.len(), 9);
        let outside = m.path(Point::new(0, 0), Point::new(-1, -1), &[], manhattan, |_, _, _| {
            Some(1.0)
        });
        assert!(outside.is_none());
    }

    #[test]
    fn path_destination_checked_before_search() {
        let m = Map::<()>::new(Range::new(0, 0, 5, 5));
        let dst = Point::new(4, 4);
        let mut asked = Vec::new();
        let p = m.path(Point::new(0, 0), dst, &points(&Direction::ALL), manhattan, |p, _, _| {
            asked.push(p);
            (p != dst).then_some(1.0)
        });
        assert!(p.is_none());
        assert_eq!(asked, vec![dst]);
    }
}
