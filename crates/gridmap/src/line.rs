use gridmap_core::Point;

use crate::map::Map;

impl<T> Map<T> {
    /// Walk the Bresenham line from `src` to `dst`, both ends included.
    ///
    /// Stops at the first out-of-bounds point (so a line leaving the map is
    /// truncated), when `visit` returns `false`, or after visiting `dst`.
    pub fn line(&self, src: Point, dst: Point, mut visit: impl FnMut(Point, &T) -> bool) {
        if !self.contains(src) {
            return;
        }

        let dx = (dst.x - src.x).abs();
        let dy = -(dst.y - src.y).abs();
        let sx = if src.x > dst.x { -1 } else { 1 };
        let sy = if src.y > dst.y { -1 } else { 1 };
        let mut err = dx + dy;
        let mut cur = src;

        loop {
            let Some(val) = self.get(cur) else {
                break;
            };
            if !visit(cur, val) || cur == dst {
                break;
            }

            let e2 = err * 2;
            if e2 >= dy {
                cur.x += sx;
                err += dy;
            }
            if e2 <= dx {
                cur.y += sy;
                err += dx;
            }
        }
    }
}
