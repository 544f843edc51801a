//! Reconstructs a concrete segment list from a winning lattice path and
//! applies the post-processing control-segment rules: ECI insertion ahead
//! of charset switches, GS1 `FNC1_FIRST_POSITION` framing, and the
//! mandatory trailing terminator.

use crate::graph::Edge;
use crate::mode::QrMode;

/// One emitted segment. `charset_index` indexes into the encoder set for
/// [`QrMode::Byte`] and [`QrMode::Eci`] segments; it is unused (`0`) for
/// every other mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub mode: QrMode,
    pub charset_index: usize,
    pub character_length: usize,
}

/// Walks `arena[winner].prev` back to the virtual source and returns the
/// data segments in left-to-right order, adjacent same-mode/same-charset
/// edges merged into one.
fn reconstruct(winner: usize, arena: &[Edge]) -> Vec<Segment> {
    let mut raw = Vec::new();
    let mut cursor = Some(winner);
    while let Some(idx) = cursor {
        let edge = &arena[idx];
        raw.push(Segment {
            mode: edge.mode,
            charset_index: edge.charset_index,
            character_length: edge.character_length,
        });
        cursor = edge.prev;
    }
    raw.reverse();

    let mut merged: Vec<Segment> = Vec::with_capacity(raw.len());
    for seg in raw {
        match merged.last_mut() {
            Some(prev) if prev.mode == seg.mode && prev.charset_index == seg.charset_index => {
                prev.character_length += seg.character_length;
            }
            _ => merged.push(seg),
        }
    }
    merged
}

/// Inserts an [`QrMode::Eci`] segment ahead of every Byte run whose charset
/// differs from the charset most recently selected by a prior Byte run.
fn insert_eci_segments(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len() + 1);
    let mut running_charset: Option<usize> = None;
    for seg in segments {
        if seg.mode == QrMode::Byte && running_charset != Some(seg.charset_index) {
            out.push(Segment {
                mode: QrMode::Eci,
                charset_index: seg.charset_index,
                character_length: 0,
            });
            running_charset = Some(seg.charset_index);
        }
        out.push(seg);
    }
    out
}

/// Applies the GS1 `FNC1_FIRST_POSITION` framing rule and reports any
/// extra control-segment bits it introduces beyond what the graph already
/// priced in (ECI-switch costs between Byte runs are already counted;
/// only the GS1 framing itself, and a defaulted leading ECI it may force,
/// are new).
fn apply_gs1(segments: &mut Vec<Segment>) -> u32 {
    let mut extra_bits = 4; // FNC1_FIRST_POSITION header
    let contains_eci = segments.iter().any(|s| s.mode == QrMode::Eci);
    let starts_with_eci = matches!(segments.first(), Some(s) if s.mode == QrMode::Eci);

    if contains_eci && !starts_with_eci {
        segments.insert(
            0,
            Segment {
                mode: QrMode::Eci,
                charset_index: 0,
                character_length: 0,
            },
        );
        extra_bits += 4 + 8;
    }

    let insert_at = if matches!(segments.first(), Some(s) if s.mode == QrMode::Eci) {
        1
    } else {
        0
    };
    segments.insert(
        insert_at,
        Segment {
            mode: QrMode::Fnc1First,
            charset_index: 0,
            character_length: 0,
        },
    );

    extra_bits
}

/// Builds the final segment list (including control segments) for the
/// winning lattice path, and returns the extra bit cost those control
/// segments add on top of the graph's `cached_total_size`.
pub(crate) fn post_process(winner: usize, arena: &[Edge], is_gs1: bool) -> (Vec<Segment>, u32) {
    let merged = reconstruct(winner, arena);
    let mut segments = insert_eci_segments(merged);

    let mut extra_bits = 0;
    if is_gs1 {
        extra_bits += apply_gs1(&mut segments);
    }

    segments.push(Segment {
        mode: QrMode::Terminator,
        charset_index: 0,
        character_length: 0,
    });
    extra_bits += 4;

    (segments, extra_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(mode: QrMode, from_position: usize, charset_index: usize, character_length: usize, prev: Option<usize>) -> Edge {
        Edge {
            mode,
            from_position,
            charset_index,
            character_length,
            prev,
            cached_total_size: 0,
            effective_charset: charset_index,
        }
    }

    #[test]
    fn merges_adjacent_same_mode_edges() {
        let arena = vec![
            edge(QrMode::Alphanumeric, 0, 0, 2, None),
            edge(QrMode::Alphanumeric, 2, 0, 1, Some(0)),
        ];
        let (segments, extra) = post_process(1, &arena, false);
        assert_eq!(segments[0].mode, QrMode::Alphanumeric);
        assert_eq!(segments[0].character_length, 3);
        assert_eq!(segments.last().unwrap().mode, QrMode::Terminator);
        assert_eq!(extra, 4);
    }

    #[test]
    fn inserts_eci_before_each_distinct_byte_charset() {
        let arena = vec![
            edge(QrMode::Byte, 0, 0, 1, None),
            edge(QrMode::Byte, 1, 1, 1, Some(0)),
        ];
        let (segments, _) = post_process(1, &arena, false);
        assert_eq!(segments[0].mode, QrMode::Eci);
        assert_eq!(segments[0].charset_index, 0);
        assert_eq!(segments[1].mode, QrMode::Byte);
        assert_eq!(segments[2].mode, QrMode::Eci);
        assert_eq!(segments[2].charset_index, 1);
        assert_eq!(segments[3].mode, QrMode::Byte);
    }

    #[test]
    fn gs1_prepends_fnc1_when_no_leading_eci() {
        let arena = vec![edge(QrMode::Numeric, 0, 0, 3, None)];
        let (segments, extra) = post_process(0, &arena, true);
        assert_eq!(segments[0].mode, QrMode::Fnc1First);
        assert_eq!(extra, 4 + 4);
    }

    #[test]
    fn gs1_inserts_fnc1_after_leading_eci_and_defaults_one_if_missing() {
        let arena = vec![
            edge(QrMode::Byte, 0, 0, 1, None),
            edge(QrMode::Byte, 1, 1, 1, Some(0)),
        ];
        let (segments, extra) = post_process(1, &arena, true);
        assert_eq!(segments[0].mode, QrMode::Eci);
        assert_eq!(segments[1].mode, QrMode::Fnc1First);
        assert_eq!(extra, 4 + 4);
    }
}
