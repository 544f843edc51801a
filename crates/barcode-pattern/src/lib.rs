//! Fixed-point bar-width variance scoring, shared by every guard-pattern
//! matcher in this toolkit (`barcode-pdf417`'s start/stop pattern search).
//!
//! The fixed-point scale below (`INTEGER_MATH_SHIFT = 8`, i.e. `1 << 8 =
//! 256`) is an ABI constant: callers compare the raw returned numbers, so it
//! must never change.

/// Fixed-point shift used throughout this crate: all intermediate ratios
/// are scaled by `1 << INTEGER_MATH_SHIFT` before rounding to an integer.
pub const INTEGER_MATH_SHIFT: u32 = 8;

/// Returns the average variance between observed run-lengths `counters`
/// and the target `pattern`, scaled by `1 << INTEGER_MATH_SHIFT`.
///
/// Returns `u32::MAX` ("no match") when either:
/// - `counters` sums to less than `pattern` does (not enough pixels per
///   unit to even attempt a comparison), or
/// - any individual counter's variance exceeds `max_individual_variance *
///   unit_bar_width`.
///
/// Panics if `counters.len() != pattern.len()` or `pattern` sums to zero —
/// both are caller contract violations, not representable inputs.
pub fn variance(counters: &[u32], pattern: &[u32], max_individual_variance: u32) -> u32 {
    assert_eq!(
        counters.len(),
        pattern.len(),
        "counters and pattern must have the same length"
    );

    let total: u64 = counters.iter().map(|&c| c as u64).sum();
    let pattern_len: u64 = pattern.iter().map(|&p| p as u64).sum();
    assert!(pattern_len > 0, "pattern must not be all-zero");

    if total < pattern_len {
        return u32::MAX;
    }

    let unit = (total << INTEGER_MATH_SHIFT) / pattern_len;
    let max_individual_variance = (max_individual_variance as u64 * unit) >> INTEGER_MATH_SHIFT;

    let mut total_variance: u64 = 0;
    for (&counter, &pat) in counters.iter().zip(pattern.iter()) {
        let scaled_counter = (counter as u64) << INTEGER_MATH_SHIFT;
        let scaled_pattern = pat as u64 * unit;
        let variance = scaled_counter.abs_diff(scaled_pattern);
        if variance > max_individual_variance {
            return u32::MAX;
        }
        total_variance += variance;
    }

    (total_variance / total).min(u32::MAX as u64) as u32
}
