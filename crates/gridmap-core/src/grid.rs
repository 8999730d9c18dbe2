//! The [`Grid`] type: dense row-major storage of one `T` per cell.
//!
//! A `Grid` covers `[0, width) × [0, height)`. Accessors never panic on
//! out-of-bounds points: reads return `None` and writes report `false`.
//! Origin-offset maps translate into this space before calling in.

use crate::error::GridError;
use crate::geom::{Point, Range, RangeIter};

/// A dense 2D grid of `T` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Default + Clone> Grid<T> {
    /// Create a new grid of the given dimensions, filled with `T::default()`.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            cells: vec![T::default(); w * h],
            width: w,
            height: h,
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from row-major `cells`.
    pub fn from_vec(width: i32, height: i32, cells: Vec<T>) -> Result<Self, GridError> {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        if cells.len() != w * h {
            return Err(GridError::SizeMismatch {
                expected: w * h,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width: w,
            height: h,
        })
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width as i32, self.height as i32)
    }

    /// Size of the grid as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width as i32, self.height as i32)
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Read the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and changes nothing) if `p` is
    /// outside the grid.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Assign `factory()` to every cell, in row-major order. The factory runs
    /// once per cell, so it may hand out distinct values.
    pub fn fill(&mut self, mut factory: impl FnMut() -> T) {
        for c in self.cells.iter_mut() {
            *c = factory();
        }
    }

    /// Visit every cell in row-major order until `visit` returns `false`.
    pub fn visit(&self, mut visit: impl FnMut(Point, &T) -> bool) {
        for (p, v) in self.iter() {
            if !visit(p, v) {
                break;
            }
        }
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }

    /// Consume the grid, returning its row-major cells.
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, &T)` pairs in a [`Grid`].
pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    inner: RangeIter,
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (Point, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = (p.y as usize) * self.grid.width + (p.x as usize);
        Some((p, &self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for GridIter<'_, T> {}
