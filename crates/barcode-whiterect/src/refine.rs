//! Corner refinement: walks diagonals inward from the bounding rectangle
//! found by `Expander` to locate the actual black-module corners.
//!
//! The `i`-linear / `j`-double-step diagonal walk in `find_edge_point` is
//! preserved literally — its geometric rationale isn't obvious from first
//! principles, and it must not be "simplified" to a single step size.

use barcode_core::{midpoint, BinaryImage, Point};

pub(crate) struct Refiner<'a> {
    image: &'a dyn BinaryImage,
    try_harder: bool,
}

impl<'a> Refiner<'a> {
    pub fn new(image: &'a dyn BinaryImage, try_harder: bool) -> Self {
        Self { image, try_harder }
    }

    fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.image.width() as i32 || y >= self.image.height() as i32 {
            return false;
        }
        self.image.get(x as u32, y as u32)
    }

    /// Samples `round(euclidean(a, b))` points along the segment `a`-`b`
    /// and returns the first one that lands on a black pixel.
    pub fn get_black_point_on_segment(&self, a: Point, b: Point) -> Option<Point> {
        let dist = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt().round() as i32;
        let dist = dist.max(1);
        let xstep = (b.x - a.x) / dist as f32;
        let ystep = (b.y - a.y) / dist as f32;
        for i in 0..=dist {
            let x = a.x + i as f32 * xstep;
            let y = a.y + i as f32 * ystep;
            if self.pixel(x.round() as i32, y.round() as i32) {
                return Some(Point::new(x, y));
            }
        }
        None
    }

    fn black_fraction(&self, a: Point, b: Point) -> f32 {
        let dist = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt().round() as i32;
        if dist == 0 {
            return if self.pixel(a.x.round() as i32, a.y.round() as i32) {
                1.0
            } else {
                0.0
            };
        }
        let xstep = (b.x - a.x) / dist as f32;
        let ystep = (b.y - a.y) / dist as f32;
        let mut black = 0;
        for i in 0..=dist {
            let x = a.x + i as f32 * xstep;
            let y = a.y + i as f32 * ystep;
            if self.pixel(x.round() as i32, y.round() as i32) {
                black += 1;
            }
        }
        black as f32 / (dist + 1) as f32
    }

    /// `true` if the segment `a1`-`a2` lies (almost) entirely inside one
    /// black module.
    pub fn in_black_module(&self, a1: Point, a2: Point) -> bool {
        let dist = ((a2.x - a1.x).powi(2) + (a2.y - a1.y).powi(2)).sqrt().round();
        if dist == 0.0 {
            return self.pixel(a1.x.round() as i32, a1.y.round() as i32);
        }
        self.black_fraction(a1, a2) > 0.9
    }

    /// Heuristic corner validator: `a` and `b` must share an axis. Checks a
    /// short span (5% of the short side) for <=10% black density, then the
    /// full long side for <=15% black density. Axis mismatch is a caller
    /// bug and panics rather than returning `false`.
    pub fn is_corner_point(&self, a: Point, b: Point, side: f32, vside: f32) -> bool {
        let shares_x = (a.x - b.x).abs() < 0.5;
        let shares_y = (a.y - b.y).abs() < 0.5;
        assert!(
            shares_x || shares_y,
            "is_corner_point: a and b must share an axis"
        );

        let (short_len, long_len) = if side <= vside { (side, vside) } else { (vside, side) };
        let short_span = (short_len * 0.05).max(1.0);
        const STEPS: i32 = 10;

        if shares_x {
            for sign in [-1.0_f32, 1.0] {
                let nb = Point::new(b.x + short_span * sign, b.y);
                if self.black_fraction(a, nb) > 0.10 {
                    return false;
                }
            }
            for k in 1..=STEPS {
                let frac = (k as f32 / STEPS as f32) * long_len;
                for sign in [-1.0_f32, 1.0] {
                    let nb = Point::new(b.x, b.y + frac * sign);
                    if self.black_fraction(a, nb) > 0.15 {
                        return false;
                    }
                }
            }
        } else {
            for sign in [-1.0_f32, 1.0] {
                let nb = Point::new(b.x, b.y + short_span * sign);
                if self.black_fraction(a, nb) > 0.10 {
                    return false;
                }
            }
            for k in 1..=STEPS {
                let frac = (k as f32 / STEPS as f32) * long_len;
                for sign in [-1.0_f32, 1.0] {
                    let nb = Point::new(b.x + frac * sign, b.y);
                    if self.black_fraction(a, nb) > 0.15 {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Shifts `a` away from `opp` (relative to `edge`) until it leaves the
    /// black module it started in, then two pixels further.
    pub fn decentralise(&self, mut a: Point, edge: Point, opp: Point) -> Point {
        let dx = if edge.x >= opp.x { 1.0 } else { -1.0 };
        let dy = if edge.y >= opp.y { 1.0 } else { -1.0 };
        while self.pixel(a.x.round() as i32, a.y.round() as i32) {
            a.x += dx;
            a.y += dy;
        }
        a.x += 2.0 * dx;
        a.y += 2.0 * dy;
        a
    }

    fn on_border(&self, p: Point) -> bool {
        p.x <= 0.0
            || p.y <= 0.0
            || p.x >= (self.image.width() as f32 - 1.0)
            || p.y >= (self.image.height() as f32 - 1.0)
    }

    /// Scans the two edges emanating from `edge` (toward `opp` on each
    /// axis) for the first black pixel, keeping only ones `is_corner_point`
    /// validates as a genuine corner rather than noise.
    fn precheck_edges(&self, edge: Point, opp: Point, max_size: f32, vside: f32) -> Option<Point> {
        let horizontal = self.get_black_point_on_segment(edge, Point::new(opp.x, edge.y));
        if let Some(h) = horizontal {
            if self.is_corner_point(h, Point::new(h.x, edge.y), max_size, vside) {
                return Some(h);
            }
        }
        let vertical = self.get_black_point_on_segment(edge, Point::new(edge.x, opp.y));
        if let Some(v) = vertical {
            if self.is_corner_point(v, Point::new(edge.x, v.y), max_size, vside) {
                return Some(v);
            }
        }
        None
    }

    /// Walks parallel diagonals from `edge` toward `opp`, refining the
    /// black-module corner nearest `edge`.
    pub fn find_edge_point(&self, edge: Point, opp: Point) -> Option<Point> {
        let dx = if opp.x >= edge.x { 1.0 } else { -1.0 };
        let dy = if opp.y >= edge.y { 1.0 } else { -1.0 };
        let max_size = (opp.x - edge.x).abs();
        let vertical_max_size = (opp.y - edge.y).abs();

        // One-time try_harder precheck along the two edges emanating from
        // `edge`, kept as a last-resort fallback below.
        let precheck = if self.try_harder {
            self.precheck_edges(edge, opp, max_size.max(1.0), vertical_max_size.max(1.0))
        } else {
            None
        };

        let mut i = 1.0_f32;
        let mut j = 2.0_f32;

        while j < max_size / 2.0 && j < vertical_max_size / 2.0 {
            let probe_from = Point::new(edge.x + i * dx, edge.y);
            let probe_to = Point::new(edge.x, edge.y + i * dy);
            let a = self.get_black_point_on_segment(probe_from, probe_to);

            if self.try_harder {
                let a1 = self.get_black_point_on_segment(
                    Point::new(edge.x, edge.y + i * dy),
                    Point::new(edge.x + j * dx, edge.y + i * dy),
                );
                let a2 = self.get_black_point_on_segment(
                    Point::new(edge.x + i * dx, edge.y),
                    Point::new(edge.x + i * dx, edge.y + j * dy),
                );

                if let (Some(p1), Some(p2)) = (a1, a2) {
                    if !self.in_black_module(p1, p2) {
                        return Some(self.decentralise(midpoint(p1, p2), edge, opp));
                    }
                    if self.on_border(p1) {
                        return Some(p1);
                    }
                    if self.on_border(p2) {
                        return Some(p2);
                    }
                    // Neither border point is acceptable on its own: fall
                    // back to a point reconstructed from the outer extent
                    // of the two candidates, pulled toward `edge`'s corner.
                    let rx = if dx > 0.0 { p1.x.max(p2.x) } else { p1.x.min(p2.x) };
                    let ry = if dy > 0.0 { p1.y.max(p2.y) } else { p1.y.min(p2.y) };
                    return Some(Point::new(rx, ry));
                }
            } else if let Some(p) = a {
                return Some(p);
            }

            i += 1.0;
            j += 2.0;
        }

        precheck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barcode_core::BitMatrix;

    #[test]
    fn get_black_point_on_segment_finds_black() {
        let mut m = BitMatrix::new(20, 20);
        m.set(10, 10, true);
        let r = Refiner::new(&m, false);
        let found = r
            .get_black_point_on_segment(Point::new(0.0, 10.0), Point::new(19.0, 10.0))
            .expect("should find a black pixel on the row");
        assert!((found.y - 10.0).abs() < 1.0);
    }

    #[test]
    fn get_black_point_on_segment_returns_none_on_white() {
        let m = BitMatrix::new(20, 20);
        let r = Refiner::new(&m, false);
        assert!(r
            .get_black_point_on_segment(Point::new(0.0, 0.0), Point::new(19.0, 19.0))
            .is_none());
    }

    #[test]
    fn in_black_module_detects_solid_segment() {
        let mut m = BitMatrix::new(20, 20);
        m.set_region(5, 5, 15, 15, true);
        let r = Refiner::new(&m, false);
        assert!(r.in_black_module(Point::new(6.0, 6.0), Point::new(12.0, 6.0)));
        assert!(!r.in_black_module(Point::new(0.0, 0.0), Point::new(19.0, 0.0)));
    }

    #[test]
    #[should_panic]
    fn is_corner_point_panics_on_axis_mismatch() {
        let m = BitMatrix::new(20, 20);
        let r = Refiner::new(&m, true);
        r.is_corner_point(Point::new(1.0, 1.0), Point::new(5.0, 5.0), 10.0, 10.0);
    }
}
