use barcode_core::BinaryImage;

/// Four integer edges of a search rectangle, transiently allowed to go
/// out of bounds while expanding — see `Expander::expand`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RectangleState {
    pub left: i32,
    pub right: i32,
    pub up: i32,
    pub down: i32,
}

/// The percentage of a border's length that is allowed to be black noise
/// before `try_harder`'s tolerant scan gives up and declares the border
/// not-white (§4.2).
const TOLERANCE_PERCENT: f32 = 2.0;

#[derive(Default, Clone, Copy, Debug)]
struct StickyFlags {
    right: bool,
    bottom: bool,
    left: bool,
    top: bool,
}

impl StickyFlags {
    fn any(&self) -> bool {
        self.right || self.bottom || self.left || self.top
    }
}

pub(crate) struct Expander<'a> {
    image: &'a dyn BinaryImage,
    try_harder: bool,
}

pub(crate) enum ExpandOutcome {
    Converged(RectangleState),
    SizeExceeded { any_black_seen: bool },
}

impl<'a> Expander<'a> {
    pub fn new(image: &'a dyn BinaryImage, try_harder: bool) -> Self {
        Self { image, try_harder }
    }

    /// Scans the inclusive pixel range `[a, b]` along one axis at the fixed
    /// coordinate on the other axis. `horizontal = true` scans x over `[a,
    /// b]` at `y = fixed`; `horizontal = false` scans y over `[a, b]` at `x
    /// = fixed`.
    fn contains_black(&self, a: i32, b: i32, fixed: i32, horizontal: bool) -> bool {
        let (lo, hi) = (a.min(b), a.max(b));
        let tolerance = if self.try_harder {
            (((hi - lo) as f32) * TOLERANCE_PERCENT / 100.0).round() as u32
        } else {
            0
        };

        let mut black_count = 0u32;
        for v in lo..=hi {
            let black = if horizontal {
                self.pixel(v, fixed)
            } else {
                self.pixel(fixed, v)
            };
            if black {
                if !self.try_harder {
                    return true;
                }
                black_count += 1;
                if black_count > tolerance {
                    return true;
                }
            }
        }
        false
    }

    fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.image.width() as i32 || y >= self.image.height() as i32 {
            return false;
        }
        self.image.get(x as u32, y as u32)
    }

    /// Runs the four-sided expansion loop described in §4.2.
    pub fn expand(&self, initial: RectangleState) -> ExpandOutcome {
        let width = self.image.width() as i32;
        let height = self.image.height() as i32;
        let RectangleState {
            mut left,
            mut right,
            mut up,
            mut down,
        } = initial;
        let mut sticky = StickyFlags::default();

        loop {
            let mut any_black_on_border = false;

            // right
            loop {
                if right >= width {
                    return ExpandOutcome::SizeExceeded {
                        any_black_seen: sticky.any(),
                    };
                }
                let found = self.contains_black(up, down, right, false);
                if found {
                    right += 1;
                    any_black_on_border = true;
                    sticky.right = true;
                } else if !sticky.right {
                    right += 1;
                } else {
                    break;
                }
            }

            // bottom
            loop {
                if down >= height {
                    return ExpandOutcome::SizeExceeded {
                        any_black_seen: sticky.any(),
                    };
                }
                let found = self.contains_black(left, right, down, true);
                if found {
                    down += 1;
                    any_black_on_border = true;
                    sticky.bottom = true;
                } else if !sticky.bottom {
                    down += 1;
                } else {
                    break;
                }
            }

            // left
            loop {
                if left < 0 {
                    return ExpandOutcome::SizeExceeded {
                        any_black_seen: sticky.any(),
                    };
                }
                let found = self.contains_black(up, down, left, false);
                if found {
                    left -= 1;
                    any_black_on_border = true;
                    sticky.left = true;
                } else if !sticky.left {
                    left -= 1;
                } else {
                    break;
                }
            }

            // top
            loop {
                if up < 0 {
                    return ExpandOutcome::SizeExceeded {
                        any_black_seen: sticky.any(),
                    };
                }
                let found = self.contains_black(left, right, up, true);
                if found {
                    up -= 1;
                    any_black_on_border = true;
                    sticky.top = true;
                } else if !sticky.top {
                    up -= 1;
                } else {
                    break;
                }
            }

            log::trace!(
                "white-rect expansion round: left={left} right={right} up={up} down={down} any_black={any_black_on_border}"
            );

            if !any_black_on_border {
                // A side only stops expanding without finding black once its
                // sticky flag is set, so reaching here implies `sticky.any()`.
                debug_assert!(sticky.any());
                return ExpandOutcome::Converged(RectangleState {
                    left,
                    right,
                    up,
                    down,
                });
            }
        }
    }
}
