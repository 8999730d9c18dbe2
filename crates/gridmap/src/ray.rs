//! DDA ray casting and brute-force line of sight.

use gridmap_core::Point;

use crate::map::Map;

impl<T> Map<T> {
    /// Cast a ray from the centre of `src` at `angle` degrees, visiting every
    /// cell it crosses in order until `max_dist` is exceeded. The distance
    /// handed to `visit` is the ray length at which the cell is entered.
    ///
    /// The ray steps across whichever grid line (vertical or horizontal) is
    /// nearer in ray-parameter units, so thin diagonal crossings are never
    /// skipped. `src` itself is not visited. The walk stops at the first cell
    /// beyond `max_dist`, the first out-of-bounds cell, or when `visit`
    /// returns `false`.
    pub fn cast_ray(
        &self,
        src: Point,
        angle: f64,
        max_dist: f64,
        mut visit: impl FnMut(Point, f64, &T) -> bool,
    ) {
        if !self.contains(src) {
            return;
        }

        let (sin, cos) = angle.to_radians().sin_cos();
        let len = cos.hypot(sin);
        let (dir_x, dir_y) = (cos / len, sin / len);

        // Ray length needed to cross one full cell along each axis.
        let unit_x = if dir_x == 0.0 { f64::INFINITY } else { (1.0 / dir_x).abs() };
        let unit_y = if dir_y == 0.0 { f64::INFINITY } else { (1.0 / dir_y).abs() };
        let step_x = if dir_x < 0.0 { -1 } else { 1 };
        let step_y = if dir_y < 0.0 { -1 } else { 1 };

        // The ray leaves from the centre of `src`, half a cell from each edge.
        let mut len_x = 0.5 * unit_x;
        let mut len_y = 0.5 * unit_y;

        let mut cur = src;
        loop {
            let dist;
            if len_x < len_y {
                cur.x += step_x;
                dist = len_x;
                len_x += unit_x;
            } else {
                cur.y += step_y;
                dist = len_y;
                len_y += unit_y;
            }

            if dist > max_dist {
                break;
            }

            let Some(val) = self.get(cur) else {
                break;
            };
            if !visit(cur, dist, val) {
                break;
            }
        }
    }

    /// Cast one ray per whole degree in `[0, 360)` from `src`.
    ///
    /// Cells covered by several rays are visited once per ray; deduplicate
    /// in `visit` if that matters.
    pub fn line_of_sight(
        &self,
        src: Point,
        max_dist: f64,
        mut visit: impl FnMut(Point, f64, &T) -> bool,
    ) {
        if !self.contains(src) {
            return;
        }

        for deg in 0..360u16 {
            self.cast_ray(src, f64::from(deg), max_dist, &mut visit);
        }
    }
}
