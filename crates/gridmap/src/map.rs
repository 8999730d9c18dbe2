use gridmap_core::{Grid, GridError, Point, Range};

/// A generic 2D map: a [`Grid`] of `T` placed at an origin-offset [`Range`].
///
/// All coordinates taken and reported by `Map` are absolute; cell storage is
/// indexed relative to `range().min`. Out-of-range access is reported through
/// `Option`/`bool` results, except for [`must_get`](Map::must_get).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<T> {
    pub(crate) cells: Grid<T>,
    pub(crate) rc: Range,
}

impl<T: Default + Clone> Map<T> {
    /// Create a map covering `rc`, every cell holding `T::default()`.
    pub fn new(rc: Range) -> Self {
        Self {
            cells: Grid::new(rc.width(), rc.height()),
            rc,
        }
    }
}

impl<T> Map<T> {
    /// Wrap an existing grid, placing its `(0, 0)` cell at `origin`.
    pub fn from_grid(origin: Point, cells: Grid<T>) -> Self {
        let rc = cells.bounds() + origin;
        Self { cells, rc }
    }

    /// Grid width and height.
    #[inline]
    pub fn size(&self) -> Point {
        self.cells.size()
    }

    /// The bounding rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.rc
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rc.contains(p)
    }

    /// Value at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.cells.get(p - self.rc.min)
    }

    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.cells.get_mut(p - self.rc.min)
    }

    /// Value at `p`, or an [`GridError::OutOfBounds`] describing the miss.
    pub fn try_get(&self, p: Point) -> Result<&T, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds {
            point: p,
            range: self.rc,
        })
    }

    /// Value at `p` for call sites that already know `p` is in range.
    ///
    /// # Panics
    ///
    /// Panics on out-of-bounds access.
    pub fn must_get(&self, p: Point) -> &T {
        match self.try_get(p) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Set the value at `p`. Returns `false` if `p` is out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, v: T) -> bool {
        self.cells.set(p - self.rc.min, v)
    }

    /// Fill every cell with values produced by `factory`.
    pub fn fill(&mut self, factory: impl FnMut() -> T) {
        self.cells.fill(factory);
    }

    /// Visit every cell in row-major order until `visit` returns `false`.
    pub fn visit(&self, mut visit: impl FnMut(Point, &T) -> bool) {
        let origin = self.rc.min;
        self.cells.visit(|p, v| visit(p + origin, v));
    }

    /// Row-major iterator over `(Point, &T)` pairs in absolute coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        let origin = self.rc.min;
        self.cells.iter().map(move |(p, v)| (p + origin, v))
    }

    /// Give back the underlying grid.
    pub fn into_grid(self) -> Grid<T> {
        self.cells
    }

    /// Visit the cells at `src + d` for each displacement in `dirs`, in order.
    ///
    /// Out-of-bounds neighbours are skipped silently. Iteration stops the
    /// first time `visit` returns `false`.
    pub fn neighbours(
        &self,
        src: Point,
        dirs: &[Point],
        mut visit: impl FnMut(Point, &T) -> bool,
    ) {
        for &d in dirs {
            let cur = src + d;
            let Some(val) = self.get(cur) else {
                continue;
            };
            if !visit(cur, val) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmap_core::{Direction, points};

    #[test]
    fn map_bounds() {
        let m = Map::<()>::new(Range::new(0, 0, 20, 10));
        assert_eq!(m.size(), Point::new(20, 10));
        assert_eq!(m.range(), Range::new(0, 0, 20, 10));
    }

    #[test]
    fn map_get_set() {
        let mut m = Map::<i32>::new(Range::new(0, 0, 10, 10));
        let p = Point::new(1, 1);
        assert_eq!(m.get(p), Some(&0));
        assert!(m.set(p, 1));
        assert_eq!(m.get(p), Some(&1));

        let oob = Point::new(11, 11);
        assert!(!m.set(oob, 1));
        assert_eq!(m.get(oob), None);
    }

    #[test]
    fn map_must_get() {
        let mut m = Map::<i32>::new(Range::new(0, 0, 10, 10));
        m.set(Point::new(1, 1), 1);
        assert_eq!(*m.must_get(Point::new(1, 1)), 1);
    }

    #[test]
    #[should_panic(expected = "out-of-bounds")]
    fn map_must_get_panics_out_of_bounds() {
        let m = Map::<i32>::new(Range::new(0, 0, 10, 10));
        m.must_get(Point::new(11, 11));
    }

    #[test]
    fn map_try_get_reports_miss() {
        let m = Map::<i32>::new(Range::new(0, 0, 2, 2));
        assert_eq!(m.try_get(Point::new(1, 1)), Ok(&0));
        assert_eq!(
            m.try_get(Point::new(2, 0)),
            Err(GridError::OutOfBounds {
                point: Point::new(2, 0),
                range: Range::new(0, 0, 2, 2),
            })
        );
    }

    #[test]
    fn map_offset_origin() {
        let mut m = Map::<i32>::new(Range::new(10, 10, 13, 12));
        assert_eq!(m.size(), Point::new(3, 2));
        assert!(m.get(Point::new(0, 0)).is_none());
        assert!(m.set(Point::new(12, 11), 5));
        assert_eq!(m.get(Point::new(12, 11)), Some(&5));
        assert_eq!(m.iter().next().map(|(p, _)| p), Some(Point::new(10, 10)));

        let grid = m.clone().into_grid();
        assert_eq!(grid.get(Point::new(2, 1)), Some(&5));
        assert_eq!(Map::from_grid(Point::new(10, 10), grid), m);
    }

    #[test]
    fn map_iter_and_visit() {
        const W: i32 = 10;
        const H: i32 = 10;
        let mut m = Map::<i32>::new(Range::new(0, 0, W, H));
        assert_eq!(m.iter().count(), (W * H) as usize);

        m.set(Point::new(0, 0), 1);
        m.set(Point::new(1, 0), 2);
        m.set(Point::new(2, 0), 3);

        let mut c = 0;
        m.visit(|p, v| {
            if p.x > 1 {
                return false;
            }
            c += v;
            true
        });
        assert_eq!(c, 3);
    }

    #[test]
    fn map_fill() {
        let mut m = Map::<i32>::new(Range::new(0, 0, 5, 5));
        m.fill(|| 1);
        assert_eq!(m.iter().map(|(_, v)| *v).sum::<i32>(), 25);
        for p in m.range() {
            assert_eq!(m.get(p), Some(&1));
        }
    }

    fn neighbours_count(m: &Map<()>, p: Point, d: &[Point]) -> usize {
        let mut count = 0;
        m.neighbours(p, d, |_, _| {
            count += 1;
            true
        });
        count
    }

    #[test]
    fn map_neighbours() {
        let m = Map::<()>::new(Range::new(0, 0, 5, 5));
        let d = points(&Direction::CARDINAL);
        let cases = [
            (Point::new(0, 0), 2),
            (Point::new(2, 0), 3),
            (Point::new(4, 0), 2),
            (Point::new(4, 2), 3),
            (Point::new(4, 4), 2),
            (Point::new(2, 4), 3),
            (Point::new(0, 4), 2),
            (Point::new(0, 2), 3),
            (Point::new(2, 2), 4),
        ];
        for (i, (p, want)) in cases.into_iter().enumerate() {
            assert_eq!(neighbours_count(&m, p, &d), want, "case[{i}] point {p}");
        }
        assert_eq!(neighbours_count(&m, Point::new(2, 2), &points(&Direction::ALL)), 8);
        assert_eq!(neighbours_count(&m, Point::new(0, 0), &points(&Direction::ALL)), 3);
    }

    #[test]
    fn map_neighbours_order_and_break() {
        let m = Map::<()>::new(Range::new(0, 0, 5, 5));
        let start = Point::new(2, 2);
        let mut seen = Vec::new();
        m.neighbours(start, &points(&Direction::CARDINAL), |p, _| {
            seen.push(p);
            false
        });
        assert_eq!(seen, vec![start + Direction::North]);

        seen.clear();
        m.neighbours(start, &points(&[Direction::West, Direction::East]), |p, _| {
            seen.push(p);
            true
        });
        assert_eq!(seen, vec![Point::new(1, 2), Point::new(3, 2)]);
    }
}
