//! White-rectangle detector.
//!
//! Finds the smallest white-bordered axis-aligned bounding box around a
//! candidate symbol on a binary image, then refines its four corners.
//! Built on top of `barcode-core`'s `BinaryImage`/`Point`, the same way
//! `calib-targets-chessboard` is built on `calib-targets-core`.

mod rectangle;
mod refine;

use barcode_core::{BinaryImage, NotFound, Point};
use rectangle::{ExpandOutcome, Expander, RectangleState};
use refine::Refiner;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Default initial search-window side length, centred on the image unless
/// overridden (§6).
pub const INIT_SIZE: u32 = 10;

/// Corner refinement offset applied by `center_edges` (§4.2).
const CORR: f32 = 1.0;

/// Detects the smallest white-bordered bounding box around a candidate
/// symbol and refines its four corners.
pub struct WhiteRectangleDetector<'a> {
    image: &'a dyn BinaryImage,
    try_harder: bool,
    initial: RectangleState,
}

impl<'a> WhiteRectangleDetector<'a> {
    /// Builds a detector centred on `center` (default: image centre) with
    /// an initial search window of `init_size` (default: [`INIT_SIZE`]).
    ///
    /// Fails with [`NotFound`] if the initial window falls outside the
    /// image.
    pub fn new(
        image: &'a dyn BinaryImage,
        init_size: Option<u32>,
        center: Option<(u32, u32)>,
        try_harder: bool,
    ) -> Result<Self, NotFound> {
        let init_size = init_size.unwrap_or(INIT_SIZE) as i32;
        let half = init_size / 2;
        let (cx, cy) = center.unwrap_or((image.width() / 2, image.height() / 2));
        let (cx, cy) = (cx as i32, cy as i32);

        let initial = RectangleState {
            left: cx - half,
            right: cx + half,
            up: cy - half,
            down: cy + half,
        };

        if initial.left < 0
            || initial.up < 0
            || initial.right >= image.width() as i32
            || initial.down >= image.height() as i32
        {
            return Err(NotFound::SizeExceeded);
        }

        Ok(Self {
            image,
            try_harder,
            initial,
        })
    }

    /// Runs the expansion and corner-refinement search.
    ///
    /// Returns four points ordered `[topmost, leftmost, rightmost,
    /// bottommost]`; points 0 and 3 are diagonal opposites, as are 1 and 2.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self), fields(try_harder = self.try_harder))
    )]
    pub fn detect(&self) -> Result<[Point; 4], NotFound> {
        let expander = Expander::new(self.image, self.try_harder);
        let rect = match expander.expand(self.initial) {
            ExpandOutcome::Converged(rect) => rect,
            ExpandOutcome::SizeExceeded { any_black_seen } => {
                return Err(if any_black_seen {
                    NotFound::SizeExceeded
                } else {
                    NotFound::NoBlackBorderSeen
                });
            }
        };

        let refiner = Refiner::new(self.image, self.try_harder);
        let left = rect.left as f32;
        let right = rect.right as f32;
        let up = rect.up as f32;
        let down = rect.down as f32;

        let z = refiner
            .find_edge_point(Point::new(left, down), Point::new(right, up))
            .ok_or(NotFound::EdgePointMissing)?;
        let t = refiner
            .find_edge_point(Point::new(left, up), Point::new(right, down))
            .ok_or(NotFound::EdgePointMissing)?;
        let x = refiner
            .find_edge_point(Point::new(right, up), Point::new(left, down))
            .ok_or(NotFound::EdgePointMissing)?;
        let y = refiner
            .find_edge_point(Point::new(right, down), Point::new(left, up))
            .ok_or(NotFound::EdgePointMissing)?;

        Ok(self.center_edges(y, z, x, t))
    }

    /// Re-centres the four refined edge points, pushing each corner
    /// slightly inward relative to the bitmap centre (§4.2).
    fn center_edges(&self, y: Point, z: Point, x: Point, t: Point) -> [Point; 4] {
        if y.x < self.image.width() as f32 / 2.0 {
            [
                Point::new(t.x - CORR, t.y + CORR),
                Point::new(z.x + CORR, z.y + CORR),
                Point::new(x.x - CORR, x.y - CORR),
                Point::new(y.x + CORR, y.y - CORR),
            ]
        } else {
            [
                Point::new(t.x + CORR, t.y + CORR),
                Point::new(z.x + CORR, z.y - CORR),
                Point::new(x.x - CORR, x.y + CORR),
                Point::new(y.x - CORR, y.y - CORR),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barcode_core::BitMatrix;

    fn solid_square(image_size: u32, lo: u32, hi: u32) -> BitMatrix {
        let mut m = BitMatrix::new(image_size, image_size);
        m.set_region(lo, lo, hi, hi, true);
        m
    }

    #[test]
    fn all_white_image_is_not_found() {
        let m = BitMatrix::new(40, 40);
        let detector = WhiteRectangleDetector::new(&m, None, None, false).expect("construct");
        assert_eq!(detector.detect(), Err(NotFound::NoBlackBorderSeen));
    }

    #[test]
    fn construction_fails_when_initial_window_is_out_of_bounds() {
        let m = BitMatrix::new(4, 4);
        assert!(WhiteRectangleDetector::new(&m, Some(10), None, false).is_err());
    }

    #[test]
    fn finds_bounding_box_around_solid_square() {
        let m = solid_square(60, 20, 40);
        let detector = WhiteRectangleDetector::new(&m, None, None, false).expect("construct");
        let corners = detector.detect().expect("should find the square");

        // p0 (topmost) and p3 (bottommost) are diagonally opposite, as are
        // p1 (leftmost) and p2 (rightmost).
        assert!(corners[0].y <= corners[1].y + 2.0);
        assert!(corners[0].y <= corners[2].y + 2.0);
        assert!(corners[3].y + 2.0 >= corners[1].y);
        assert!(corners[3].y + 2.0 >= corners[2].y);

        for p in corners {
            assert!(p.x >= 18.0 && p.x <= 42.0, "corner x out of expected range: {p:?}");
            assert!(p.y >= 18.0 && p.y <= 42.0, "corner y out of expected range: {p:?}");
        }
    }

    #[test]
    fn try_harder_tolerates_bounded_border_noise() {
        let mut m = solid_square(60, 20, 40);
        // Scatter a little noise just outside the square, well under the
        // 2% tolerance used by contains_black under try_harder.
        m.set(0, 0, true);
        m.set(59, 0, true);

        let detector = WhiteRectangleDetector::new(&m, None, None, true).expect("construct");
        assert!(detector.detect().is_ok());
    }
}
