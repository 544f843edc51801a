//! Row-by-row guard-pattern matching: the bar/space run-length scanner that
//! `find_rows_with_pattern` sweeps down an image with.

use barcode_core::BinaryImage;
use barcode_pattern::variance;

/// Tolerance, in pixels, for shifting the scan's starting column left when
/// it lands mid-bar instead of exactly on the pattern's leading edge.
pub(crate) const MAX_PIXEL_DRIFT: i32 = 3;

/// Average-variance acceptance threshold, expressed as a fraction of the
/// fixed-point scale used by [`variance`] (§4.3, §6).
pub(crate) const MAX_AVG_VARIANCE: f32 = 0.42 * 256.0;

/// Per-bar variance cap passed straight through to [`variance`] (§4.3, §6).
pub(crate) const MAX_INDIVIDUAL_VARIANCE: u32 = (0.8 * 256.0) as u32;

/// Finds the first column, at or after `start_column` on `row`, where the
/// bar/space run-lengths match `pattern` within [`MAX_AVG_VARIANCE`].
///
/// Returns `(pattern_start, pattern_end)`: the columns of the pattern's
/// leading and trailing edge.
pub(crate) fn find_guard_pattern(
    image: &dyn BinaryImage,
    row: u32,
    start_column: u32,
    pattern: &[u32],
) -> Option<(u32, u32)> {
    let width = image.width();
    let mut column = start_column.min(width.saturating_sub(1));

    let mut drift = 0;
    while column > 0 && image.get(column, row) && drift < MAX_PIXEL_DRIFT {
        column -= 1;
        drift += 1;
    }

    let pattern_len = pattern.len();
    let mut counters = vec![0u32; pattern_len];
    let mut counter_position = 0usize;
    let mut pattern_start = column;
    let mut color = image.get(column, row);

    for x in column..width {
        let black = image.get(x, row);
        if black == color {
            counters[counter_position] += 1;
            continue;
        }

        counter_position += 1;
        if counter_position == pattern_len {
            let v = variance(&counters, pattern, MAX_INDIVIDUAL_VARIANCE);
            if v != u32::MAX && (v as f32) < MAX_AVG_VARIANCE {
                return Some((pattern_start, x));
            }

            pattern_start += counters[0] + counters[1];
            for i in 0..pattern_len - 2 {
                counters[i] = counters[i + 2];
            }
            counters[pattern_len - 2] = 0;
            counters[pattern_len - 1] = 0;
            counter_position -= 2;
        }
        counters[counter_position] = 1;
        color = black;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use barcode_core::BitMatrix;

    const START_PATTERN: [u32; 8] = [8, 1, 1, 1, 1, 1, 1, 3];

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
    fn finds_exact_start_pattern() {
        let mut m = BitMatrix::new(200, 5);
        draw_pattern(&mut m, 2, 20, &START_PATTERN, 3);
        let found = find_guard_pattern(&m, 2, 0, &START_PATTERN);
        assert!(found.is_some());
        let (start, end) = found.unwrap();
        assert!((start as i32 - 20).abs() <= MAX_PIXEL_DRIFT);
        let expected_width: u32 = START_PATTERN.iter().sum::<u32>() * 3;
        assert!((end - start).abs_diff(expected_width) <= 2);
    }

    #[test]
    fn blank_row_has_no_match() {
        let m = BitMatrix::new(100, 1);
        assert!(find_guard_pattern(&m, 0, 0, &START_PATTERN).is_none());
    }
}
