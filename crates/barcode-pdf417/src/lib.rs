//! PDF417 vertex detector.
//!
//! Locates a PDF417 symbol's eight vertices and estimates its codeword
//! pixel width by tracking the start and stop guard patterns down a binary
//! image's rows. Built on `barcode-core`'s `BinaryImage`/`Point` and
//! `barcode-pattern`'s run-length `variance`, the same way
//! `calib-targets-chessboard` is built on `calib-targets-core`.

mod guard;
mod vertices;

use barcode_core::{BinaryImage, NotFound, Point, Rotated180View};
use vertices::{compute_codeword_width_from_start_stop_pattern, find_vertices, MODULES_IN_CODEWORD};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// The eight vertices and codeword width recovered from a symbol.
///
/// `vertices` follows the map `[TL, BL, TR, BR, TL', BL', TR', BR']`, where
/// the primed (inner-corner) slots duplicate their outer counterpart in
/// this reduced core (§4.3).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pdf417Detection {
    pub vertices: [Point; 8],
    pub codeword_width: f32,
}

/// Locates a PDF417 symbol's vertices in a binary image.
pub struct Pdf417VertexDetector<'a> {
    image: &'a dyn BinaryImage,
    try_harder: bool,
}

impl<'a> Pdf417VertexDetector<'a> {
    pub fn new(image: &'a dyn BinaryImage, try_harder: bool) -> Self {
        Self { image, try_harder }
    }

    /// Runs the guard-pattern search, retrying once against a 180-degree
    /// rotated view if the upright scan fails to find a start pattern
    /// (§4.3 step 1, §7 — this retry is unconditional, unlike `try_harder`'s
    /// other effects which only loosen noise tolerance).
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self), fields(try_harder = self.try_harder))
    )]
    pub fn detect(&self) -> Result<Pdf417Detection, NotFound> {
        if let Some(detection) = self.detect_once(self.image)? {
            return Ok(detection);
        }

        let rotated = Rotated180View::new(self.image);
        if let Some(detection) = self.detect_once(&rotated)? {
            return Ok(detection);
        }

        Err(NotFound::PatternNotFound)
    }

    fn detect_once(&self, image: &dyn BinaryImage) -> Result<Option<Pdf417Detection>, NotFound> {
        let Some((vertices, start, stop)) = find_vertices(image) else {
            return Ok(None);
        };

        let codeword_width = compute_codeword_width_from_start_stop_pattern(&start, stop.as_ref());
        if codeword_width < MODULES_IN_CODEWORD {
            return Err(NotFound::CodewordWidthTooSmall);
        }

        log::trace!("pdf417 vertices found, codeword_width={codeword_width}");
        Ok(Some(Pdf417Detection {
            vertices,
            codeword_width,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barcode_core::BitMatrix;
    use vertices::{START_PATTERN, STOP_PATTERN};

    fn draw_pattern(m: &mut BitMatrix, row: u32, start: u32, pattern: &[u32], module: u32) {
        let mut x = start;
        let mut black = true;
        for &run in pattern {
            if black {
                for dx in 0..run * module {
                    m.set(x + dx, row, true);
                }
            }
            x += run * module;
            black = !black;
        }
    }

    fn symbol(module: u32) -> BitMatrix {
        let mut m = BitMatrix::new(300, 60);
        for row in 10..50 {
            draw_pattern(&mut m, row, 20, &START_PATTERN, module);
            draw_pattern(&mut m, row, 230, &STOP_PATTERN, module);
        }
        m
    }

    #[test]
    fn detects_vertices_and_codeword_width() {
        let m = symbol(3);
        let detector = Pdf417VertexDetector::new(&m, false);
        let detection = detector.detect().expect("should detect symbol");
        assert!(detection.codeword_width >= MODULES_IN_CODEWORD * 3.0 - 2.0);
        assert_eq!(detection.vertices[0], detection.vertices[4]);
        assert!(detection.vertices[0].y < detection.vertices[1].y);
    }

    #[test]
    fn blank_image_is_pattern_not_found() {
        let m = BitMatrix::new(300, 60);
        let detector = Pdf417VertexDetector::new(&m, false);
        assert_eq!(detector.detect(), Err(NotFound::PatternNotFound));
    }

    #[test]
    fn rotated_view_retry_is_unconditional_on_try_harder() {
        let upright = symbol(3);
        let mut rotated = BitMatrix::new(300, 60);
        for y in 0..60 {
            for x in 0..300 {
                if upright.get(x, y) {
                    rotated.set(300 - 1 - x, 60 - 1 - y, true);
                }
            }
        }
        let detector = Pdf417VertexDetector::new(&rotated, true);
        assert!(detector.detect().is_ok());

        // The rotated retry happens regardless of `try_harder` (§7); only
        // a missing start pattern even under rotation is `PatternNotFound`.
        let detector = Pdf417VertexDetector::new(&rotated, false);
        assert!(detector.detect().is_ok());
    }
}
