//! Locates the eight vertices of a PDF417 symbol from its start/stop guard
//! patterns, and estimates codeword pixel width from the same rows.

use barcode_core::{BinaryImage, Point};

use crate::guard::find_guard_pattern;

/// Row step used while scanning down the image for the first guard-pattern
/// hit (§4.3).
const ROW_STEP: u32 = 5;

/// Maximum horizontal drift, in pixels, tolerated between one row's guard
/// match and the next while tracking a pattern down the image (§4.3, §6).
const ROW_DRIFT: i32 = 5;

/// Consecutive non-matching rows tolerated before a pattern is considered
/// to have run out (§4.3, §6).
pub(crate) const SKIPPED_ROW_COUNT_MAX: u32 = 50;

pub(crate) const START_PATTERN: [u32; 8] = [8, 1, 1, 1, 1, 1, 1, 3];
pub(crate) const STOP_PATTERN: [u32; 9] = [7, 1, 1, 3, 1, 1, 1, 2, 1];

/// Slots in the eight-vertex output array that the start pattern's two
/// points (top, bottom) fill; index 4 duplicates index 0 and index 5
/// duplicates index 1, since this core has no separate inner-corner
/// estimate (§4.3).
pub(crate) const START_SLOTS: [usize; 4] = [0, 4, 1, 5];
/// Likewise for the stop pattern, filling the two right-hand corners.
pub(crate) const STOP_SLOTS: [usize; 4] = [6, 2, 7, 3];

/// The two rows (topmost and bottommost) where one guard pattern was
/// tracked down the image, along with the pattern's horizontal extent on
/// each of those rows.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RowMatch {
    pub top_row: u32,
    pub top_start: f32,
    pub top_end: f32,
    pub bottom_row: u32,
    pub bottom_start: f32,
    pub bottom_end: f32,
}

impl RowMatch {
    /// The vertex point at the top occurrence of this pattern.
    fn top_point(&self) -> Point {
        Point::new(self.top_start, self.top_row as f32)
    }

    /// The vertex point at the bottom occurrence of this pattern.
    fn bottom_point(&self) -> Point {
        Point::new(self.bottom_start, self.bottom_row as f32)
    }

    /// Four values, in the order `[top, top, bottom, bottom]`, ready to be
    /// zipped against a pattern's slot list.
    fn vertex_quad(&self) -> [Point; 4] {
        let top = self.top_point();
        let bottom = self.bottom_point();
        [top, top, bottom, bottom]
    }

    /// The average pixel width spanned by this pattern across its two rows.
    fn mean_width(&self) -> f32 {
        let top_width = (self.top_end - self.top_start).abs();
        let bottom_width = (self.bottom_end - self.bottom_start).abs();
        (top_width + bottom_width) / 2.0
    }
}

/// Scans the image top-to-bottom at [`ROW_STEP`] intervals looking for a
/// row that matches `pattern`, backtracks to the earliest consecutive
/// matching row, then tracks the pattern downward until it disappears for
/// more than [`SKIPPED_ROW_COUNT_MAX`] consecutive rows (§4.3).
pub(crate) fn find_rows_with_pattern(image: &dyn BinaryImage, pattern: &[u32]) -> Option<RowMatch> {
    let height = image.height();

    let mut row = 0u32;
    let mut hit_row = None;
    while row < height {
        if find_guard_pattern(image, row, 0, pattern).is_some() {
            hit_row = Some(row);
            break;
        }
        row += ROW_STEP;
    }
    let hit_row = hit_row?;

    let mut top_row = hit_row;
    let mut top_match = find_guard_pattern(image, hit_row, 0, pattern)?;
    while top_row > 0 {
        match find_guard_pattern(image, top_row - 1, 0, pattern) {
            Some(m) => {
                top_row -= 1;
                top_match = m;
            }
            None => break,
        }
    }

    let mut bottom_row = top_row;
    let mut bottom_match = top_match;
    let mut skipped = 0u32;
    let mut row = top_row + 1;
    while row < height && skipped <= SKIPPED_ROW_COUNT_MAX {
        match find_guard_pattern(image, row, 0, pattern) {
            Some(m)
                if (m.0 as i32 - bottom_match.0 as i32).abs() <= ROW_DRIFT
                    && (m.1 as i32 - bottom_match.1 as i32).abs() <= ROW_DRIFT =>
            {
                bottom_row = row;
                bottom_match = m;
                skipped = 0;
            }
            _ => skipped += 1,
        }
        row += 1;
    }

    Some(RowMatch {
        top_row,
        top_start: top_match.0 as f32,
        top_end: top_match.1 as f32,
        bottom_row,
        bottom_start: bottom_match.0 as f32,
        bottom_end: bottom_match.1 as f32,
    })
}

/// Locates the start and stop guard patterns and assembles the eight-vertex
/// array. Either pattern may be absent; at least the start pattern must be
/// found for a result.
pub(crate) fn find_vertices(
    image: &dyn BinaryImage,
) -> Option<([Point; 8], RowMatch, Option<RowMatch>)> {
    let start = find_rows_with_pattern(image, &START_PATTERN)?;
    let stop = find_rows_with_pattern(image, &STOP_PATTERN);

    let mut vertices = [Point::origin(); 8];
    for (val, &slot) in start.vertex_quad().iter().zip(START_SLOTS.iter()) {
        vertices[slot] = *val;
    }
    if let Some(ref stop) = stop {
        for (val, &slot) in stop.vertex_quad().iter().zip(STOP_SLOTS.iter()) {
            vertices[slot] = *val;
        }
    }

    Some((vertices, start, stop))
}

/// Minimum pixel span, in units of one module, that a valid codeword-width
/// estimate must clear (§4.3, §6).
pub(crate) const MODULES_IN_CODEWORD: f32 = 17.0;
const STOP_PATTERN_MODULES: f32 = 18.0;

/// Estimates the pixel width of one codeword from the start pattern's (and,
/// if present, the stop pattern's) measured span, scaling the stop
/// pattern's wider 18-module span down to the start pattern's 17-module
/// units first (§4.3).
pub(crate) fn compute_codeword_width_from_start_stop_pattern(
    start: &RowMatch,
    stop: Option<&RowMatch>,
) -> f32 {
    let w_start = start.mean_width();
    match stop {
        Some(stop) => {
            let w_stop = stop.mean_width() * (MODULES_IN_CODEWORD / STOP_PATTERN_MODULES);
            (w_start + w_stop) / 2.0
        }
        None => w_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barcode_core::BitMatrix;

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

    #[test]
    fn tracks_start_pattern_across_rows() {
        let mut m = BitMatrix::new(200, 60);
        for row in 10..50 {
            draw_pattern(&mut m, row, 20, &START_PATTERN, 3);
        }
        let found = find_rows_with_pattern(&m, &START_PATTERN).expect("should track pattern");
        assert_eq!(found.top_row, 10);
        assert_eq!(found.bottom_row, 49);
    }

    #[test]
    fn codeword_width_scales_with_module_size() {
        let mut m = BitMatrix::new(200, 60);
        for row in 10..50 {
            draw_pattern(&mut m, row, 20, &START_PATTERN, 3);
        }
        let start = find_rows_with_pattern(&m, &START_PATTERN).expect("start found");
        let width = compute_codeword_width_from_start_stop_pattern(&start, None);
        assert!(width >= MODULES_IN_CODEWORD * 3.0 - 2.0);
    }

    #[test]
    fn vertices_fill_duplicated_slots() {
        let mut m = BitMatrix::new(300, 60);
        for row in 10..50 {
            draw_pattern(&mut m, row, 20, &START_PATTERN, 3);
            draw_pattern(&mut m, row, 250, &STOP_PATTERN, 3);
        }
        let (vertices, _, stop) = find_vertices(&m).expect("should find vertices");
        assert!(stop.is_some());
        assert_eq!(vertices[0], vertices[4]);
        assert_eq!(vertices[1], vertices[5]);
        assert_eq!(vertices[2], vertices[6]);
        assert_eq!(vertices[3], vertices[7]);
    }
}
