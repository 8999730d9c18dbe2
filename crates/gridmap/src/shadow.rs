//! Recursive shadow casting.
//!
//! Each of the eight octants around the source is scanned row by row, a row
//! being the cells at one integer distance along the octant's major axis. The
//! visible part of a row is the cone between two slopes; a blocking cell
//! splits the cone, recursing into the lit part before it and carrying on
//! with the part after it.

use gridmap_core::{Point, euclidean};

use crate::map::Map;

/// Per-octant scan parameters that stay fixed across recursion.
#[derive(Clone, Copy)]
struct Sweep {
    src: Point,
    oct: u8,
    max_dist: f64,
    max_row: i32,
}

impl<T> Map<T> {
    /// Field of view from `src` by recursive shadow casting.
    ///
    /// `src` is visited first at distance 0, and its return value is
    /// ignored. Every other cell within Euclidean distance `max_dist` that is
    /// not in the shadow of a blocker is then visited with its distance.
    /// `visit` returns `false` for cells that block sight: blockers are still
    /// visited themselves but hide the cone behind them. Cells on octant
    /// boundaries may be visited more than once.
    ///
    /// Recursion depth is bounded by `max_dist` (and by the map extent).
    pub fn cast_shadow(
        &self,
        src: Point,
        max_dist: f64,
        mut visit: impl FnMut(Point, f64, &T) -> bool,
    ) {
        let Some(val) = self.get(src) else {
            return;
        };
        visit(src, 0.0, val);

        // Past this row every octant lies fully outside the map.
        let max_row = (src.x - self.rc.min.x)
            .max(self.rc.max.x - 1 - src.x)
            .max(src.y - self.rc.min.y)
            .max(self.rc.max.y - 1 - src.y);

        for oct in 0..8 {
            let sweep = Sweep {
                src,
                oct,
                max_dist,
                max_row,
            };
            self.emit_shadow(sweep, 1, 0.0, 1.0, &mut visit);
        }
    }

    fn emit_shadow<F>(
        &self,
        sweep: Sweep,
        dist: i32,
        mut slope_low: f64,
        slope_high: f64,
        visit: &mut F,
    ) where
        F: FnMut(Point, f64, &T) -> bool,
    {
        if f64::from(dist) > sweep.max_dist || dist > sweep.max_row {
            return;
        }

        let d = f64::from(dist);
        let low = (slope_low * d + 0.5).floor() as i32;
        let high = (slope_high * d + 0.5).ceil() as i32;
        let mut gap = false;

        for h in low..high {
            let pt = octant_point(sweep.src, sweep.oct, dist, h);

            let Some(val) = self.get(pt) else {
                continue;
            };
            let pdist = euclidean(sweep.src, pt);
            if pdist > sweep.max_dist {
                continue;
            }

            if visit(pt, pdist, val) {
                gap = true;
                continue;
            }

            let h = f64::from(h);
            if gap {
                self.emit_shadow(sweep, dist + 1, slope_low, (h - 0.5) / d, visit);
                gap = false;
            }
            slope_low = (h + 0.5) / d;
        }

        self.emit_shadow(sweep, dist + 1, slope_low, slope_high, visit);
    }
}

/// Map row `d`, column `h` of octant `oct` to a grid point around `p`.
///
/// Bit 0 mirrors the major axis, bit 1 the minor axis, bit 2 swaps them.
fn octant_point(p: Point, oct: u8, d: i32, h: i32) -> Point {
    let d = if oct & 0x1 != 0 { -d } else { d };
    let h = if oct & 0x2 != 0 { -h } else { h };
    let off = if oct & 0x4 != 0 {
        Point::new(h, d)
    } else {
        Point::new(d, h)
    };
    p + off
}
