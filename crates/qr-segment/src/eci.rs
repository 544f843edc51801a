//! ECI (Extended Channel Interpretation) designator registry.
//!
//! An ECI segment's payload is its 8-bit assignment number; this table
//! maps a charset name to that real ISO/IEC 18004 designator.

/// The ISO/IEC 18004 ECI designator number for `charset_name`, if one is
/// registered.
///
/// UTF-16BE has no standard designator and is deliberately left
/// unregistered here, matching its fallback-segmentation role in the
/// encoder — only its charset index, not an ECI number, is needed to keep
/// it distinguishable in the segment list.
pub fn eci_of(charset_name: &str) -> Option<u8> {
    match charset_name {
        "ISO-8859-1" => Some(3),
        "ISO-8859-2" => Some(4),
        "ISO-8859-3" => Some(5),
        "ISO-8859-4" => Some(6),
        "ISO-8859-5" => Some(7),
        "ISO-8859-6" => Some(8),
        "ISO-8859-7" => Some(9),
        "ISO-8859-8" => Some(10),
        "ISO-8859-9" => Some(11),
        "ISO-8859-10" => Some(12),
        "ISO-8859-11" => Some(13),
        "ISO-8859-13" => Some(15),
        "ISO-8859-14" => Some(16),
        "ISO-8859-15" => Some(17),
        "ISO-8859-16" => Some(18),
        "UTF-8" => Some(26),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_designators_match_iso_18004() {
        assert_eq!(eci_of("ISO-8859-1"), Some(3));
        assert_eq!(eci_of("ISO-8859-6"), Some(8));
        assert_eq!(eci_of("ISO-8859-8"), Some(10));
        assert_eq!(eci_of("UTF-8"), Some(26));
    }

    #[test]
    fn utf16be_and_unknown_names_are_unregistered() {
        assert_eq!(eci_of("UTF-16BE"), None);
        assert_eq!(eci_of("ISO-8859-12"), None);
        assert_eq!(eci_of("nonsense"), None);
    }
}
