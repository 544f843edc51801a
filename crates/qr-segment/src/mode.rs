//! QR encoding modes, versions, and error-correction capacity.

/// A QR per-segment encoding family. The first four carry data; the last
/// three are control segments emitted only by [`crate::segment::post_process`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum QrMode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
    Eci,
    Fnc1First,
    Terminator,
}

/// Traversal order for the data modes within the encoder graph: Kanji,
/// Alphanumeric, Numeric, Byte ascending. Ties between candidates of
/// equal cost are broken in this order.
pub(crate) const DATA_MODE_ORDER: [QrMode; 4] = [
    QrMode::Kanji,
    QrMode::Alphanumeric,
    QrMode::Numeric,
    QrMode::Byte,
];

impl QrMode {
    /// The bucket ordinal used to index the graph's dense vertex array:
    /// Kanji=0, Alphanumeric=1, Numeric=2, Byte=3.
    pub(crate) fn ordinal(self) -> usize {
        match self {
            QrMode::Kanji => 0,
            QrMode::Alphanumeric => 1,
            QrMode::Numeric => 2,
            QrMode::Byte => 3,
            _ => panic!("ordinal() is only defined for data modes"),
        }
    }
}

/// The three version classes a segmentation may be sized into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VersionClass {
    Small,
    Medium,
    Large,
}

impl VersionClass {
    pub fn range(self) -> std::ops::RangeInclusive<u8> {
        match self {
            VersionClass::Small => 1..=9,
            VersionClass::Medium => 10..=26,
            VersionClass::Large => 27..=40,
        }
    }

    pub fn max_version(self) -> u8 {
        *self.range().end()
    }
}

/// A QR symbol version, 1..=40.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QrVersion(u8);

impl QrVersion {
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn class(self) -> VersionClass {
        match self.0 {
            1..=9 => VersionClass::Small,
            10..=26 => VersionClass::Medium,
            _ => VersionClass::Large,
        }
    }

    /// Bits used by the character-count indicator for `mode` at this
    /// version. Zero for control modes: they have no count field of their
    /// own.
    pub fn character_count_bits(self, mode: QrMode) -> u8 {
        use VersionClass::*;
        match (mode, self.class()) {
            (QrMode::Numeric, Small) => 10,
            (QrMode::Numeric, Medium) => 12,
            (QrMode::Numeric, Large) => 14,
            (QrMode::Alphanumeric, Small) => 9,
            (QrMode::Alphanumeric, Medium) => 11,
            (QrMode::Alphanumeric, Large) => 13,
            (QrMode::Byte, Small) => 8,
            (QrMode::Byte, Medium | Large) => 16,
            (QrMode::Kanji, Small) => 8,
            (QrMode::Kanji, Medium) => 10,
            (QrMode::Kanji, Large) => 12,
            _ => 0,
        }
    }
}

/// The four QR error-correction levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum EcLevel {
    #[default]
    L,
    M,
    Q,
    H,
}

impl EcLevel {
    fn index(self) -> usize {
        match self {
            EcLevel::L => 0,
            EcLevel::M => 1,
            EcLevel::Q => 2,
            EcLevel::H => 3,
        }
    }
}

/// Data-codeword capacity per version (1..=40, row index = version-1) and
/// EC level (`[L, M, Q, H]`), per ISO/IEC 18004's standard capacity table.
#[rustfmt::skip]
const DATA_CODEWORDS: [[u32; 4]; 40] = [
    [19, 16, 13, 9], [34, 28, 22, 16], [55, 44, 34, 26], [80, 64, 48, 36],
    [108, 86, 62, 46], [136, 108, 76, 60], [156, 124, 88, 66], [194, 154, 110, 86],
    [232, 182, 132, 100], [274, 216, 154, 122], [324, 254, 180, 140], [370, 290, 206, 158],
    [428, 334, 244, 180], [461, 365, 261, 197], [523, 415, 295, 223], [589, 453, 325, 253],
    [647, 507, 367, 283], [721, 563, 397, 313], [795, 627, 445, 341], [861, 669, 485, 385],
    [932, 714, 512, 406], [1006, 782, 568, 442], [1094, 860, 614, 464], [1174, 914, 664, 514],
    [1258, 1000, 718, 538], [1338, 1062, 754, 596], [1433, 1128, 808, 628], [1532, 1193, 871, 661],
    [1640, 1267, 911, 701], [1732, 1373, 985, 745], [1840, 1455, 1033, 793], [1952, 1541, 1115, 845],
    [2068, 1631, 1171, 901], [2188, 1725, 1231, 961], [2303, 1812, 1286, 986], [2431, 1914, 1354, 1054],
    [2563, 1992, 1426, 1096], [2699, 2102, 1502, 1142], [2809, 2216, 1582, 1222], [2953, 2334, 1666, 1276],
];

/// Total data-bit capacity of `version` at `ec_level`.
pub fn capacity_bits(version: QrVersion, ec_level: EcLevel) -> u32 {
    DATA_CODEWORDS[version.number() as usize - 1][ec_level.index()] * 8
}

/// `true` iff `size_bits` fits within `version` at `ec_level`.
pub fn will_fit(size_bits: u32, version: QrVersion, ec_level: EcLevel) -> bool {
    size_bits <= capacity_bits(version, ec_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_classes_match_ranges() {
        assert_eq!(QrVersion::new(1).unwrap().class(), VersionClass::Small);
        assert_eq!(QrVersion::new(9).unwrap().class(), VersionClass::Small);
        assert_eq!(QrVersion::new(10).unwrap().class(), VersionClass::Medium);
        assert_eq!(QrVersion::new(26).unwrap().class(), VersionClass::Medium);
        assert_eq!(QrVersion::new(27).unwrap().class(), VersionClass::Large);
        assert_eq!(QrVersion::new(40).unwrap().class(), VersionClass::Large);
    }

    #[test]
    fn character_count_bits_matches_known_values() {
        let v1 = QrVersion::new(1).unwrap();
        assert_eq!(v1.character_count_bits(QrMode::Alphanumeric), 9);
        assert_eq!(v1.character_count_bits(QrMode::Byte), 8);
        let v10 = QrVersion::new(10).unwrap();
        assert_eq!(v10.character_count_bits(QrMode::Numeric), 12);
    }

    #[test]
    fn capacity_grows_monotonically_with_version() {
        let v1 = QrVersion::new(1).unwrap();
        let v2 = QrVersion::new(2).unwrap();
        assert!(capacity_bits(v1, EcLevel::L) < capacity_bits(v2, EcLevel::L));
    }

    #[test]
    fn will_fit_respects_capacity() {
        let v1 = QrVersion::new(1).unwrap();
        assert!(will_fit(19 * 8, v1, EcLevel::L));
        assert!(!will_fit(19 * 8 + 1, v1, EcLevel::L));
    }
}
