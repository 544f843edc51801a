//! The `(position, charset, mode)` shortest-path lattice.
//!
//! Vertices are a dense `position x charset x mode` grid; edges are stored
//! in a flat arena indexed by position and back-referenced by arena index
//! rather than pointer, so the winning path is reconstructed by walking
//! indices backward once the sweep reaches the final position.

use crate::charset::CharsetEncoder;
use crate::mode::{QrMode, QrVersion, DATA_MODE_ORDER};

/// QR's alphanumeric character set.
const ALPHANUMERIC_CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

fn is_alphanumeric(c: char) -> bool {
    ALPHANUMERIC_CHARS.contains(c)
}

/// Simplified Kanji eligibility: the CJK Unified Ideographs block. A real
/// Shift-JIS double-byte range check is out of scope for this core; this
/// core only needs "some characters prefer Kanji mode" to exercise the
/// graph's fourth mode.
fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// One edge in the lattice: `from_position` is where it was emitted from
/// (the tail vertex); it lands at `from_position + character_length`.
#[derive(Clone, Debug)]
pub(crate) struct Edge {
    pub mode: QrMode,
    pub from_position: usize,
    pub charset_index: usize,
    pub character_length: usize,
    pub prev: Option<usize>,
    pub cached_total_size: u32,
    /// The charset context this edge carries forward for ECI-switch cost
    /// purposes: its own `charset_index` for Byte edges, or the charset
    /// inherited from `prev` for every other mode. Kept separate from
    /// `charset_index` (which stays `0` for non-Byte edges per the data
    /// model, matching `segment.rs`'s bucket/post-processing use) so a
    /// Kanji/Alphanumeric/Numeric interlude doesn't reset the running
    /// Byte charset a later ECI-switch check compares against.
    pub effective_charset: usize,
}

/// Flat edge storage plus the landing-position buckets used for
/// relaxation. `buckets[position][charset_index][mode_ordinal]` holds the
/// arena index of that bucket's surviving edge, if any.
pub(crate) struct Lattice {
    pub arena: Vec<Edge>,
    buckets: Vec<Vec<[Option<usize>; 4]>>,
}

impl Lattice {
    fn new(n: usize, num_charsets: usize) -> Self {
        Self {
            arena: Vec::new(),
            buckets: vec![vec![[None; 4]; num_charsets.max(1)]; n + 1],
        }
    }

    fn push(&mut self, edge: Edge) -> usize {
        let landing = edge.from_position + edge.character_length;
        let cs = edge.charset_index;
        let ord = edge.mode.ordinal();
        let cost = edge.cached_total_size;
        let idx = self.arena.len();
        let slot = &mut self.buckets[landing][cs][ord];
        match slot {
            Some(existing) if self.arena[*existing].cached_total_size <= cost => {
                // existing edge is no worse; drop the new candidate without
                // ever exposing it through a bucket (still kept in the
                // arena so earlier-pushed indices stay valid).
                self.arena.push(edge);
                idx
            }
            _ => {
                *slot = Some(idx);
                self.arena.push(edge);
                idx
            }
        }
    }

    fn winners_at(&self, position: usize) -> Vec<usize> {
        self.buckets[position]
            .iter()
            .flat_map(|row| row.iter().filter_map(|&e| e))
            .collect()
    }

    pub fn best_terminal(&self, n: usize) -> Option<usize> {
        self.winners_at(n)
            .into_iter()
            .min_by_key(|&idx| self.arena[idx].cached_total_size)
    }
}

/// `4 + character_count_bits(mode)` mode-switch/ECI-switch header cost.
fn header_cost(mode: QrMode, version: QrVersion) -> u32 {
    4 + version.character_count_bits(mode) as u32
}

/// Per-mode payload bit cost, given the already-decided character length
/// and (for Byte) the actual encoded byte count.
fn payload_cost(mode: QrMode, character_length: usize, byte_len: usize) -> u32 {
    match mode {
        QrMode::Kanji => 13,
        QrMode::Alphanumeric => {
            if character_length == 1 {
                6
            } else {
                11
            }
        }
        QrMode::Numeric => match character_length {
            1 => 4,
            2 => 7,
            _ => 10,
        },
        QrMode::Byte => 8 * byte_len as u32,
        _ => 0,
    }
}

struct Candidate {
    mode: QrMode,
    charset_index: usize,
    character_length: usize,
    byte_len: usize,
}

/// Builds the outgoing edges available from a vertex at `position`. Which
/// candidates exist depends only on the remaining input; the predecessor's
/// mode/charset only affects their *cost*, computed by the caller.
fn candidates(
    chars: &[char],
    position: usize,
    encoders: &[Box<dyn CharsetEncoder>],
    priority_index: Option<usize>,
) -> Vec<Candidate> {
    let mut out = Vec::new();
    let c = chars[position];

    if is_kanji(c) {
        out.push(Candidate {
            mode: QrMode::Kanji,
            charset_index: 0,
            character_length: 1,
            byte_len: 0,
        });
    }

    if is_alphanumeric(c) {
        let len = if position + 1 < chars.len() && is_alphanumeric(chars[position + 1]) {
            2
        } else {
            1
        };
        out.push(Candidate {
            mode: QrMode::Alphanumeric,
            charset_index: 0,
            character_length: len,
            byte_len: 0,
        });
    }

    if c.is_ascii_digit() {
        let mut run = 0;
        while position + run < chars.len() && chars[position + run].is_ascii_digit() && run < 3 {
            run += 1;
        }
        out.push(Candidate {
            mode: QrMode::Numeric,
            charset_index: 0,
            character_length: run,
            byte_len: 0,
        });
    }

    let restrict_to = priority_index.filter(|&i| encoders[i].can_encode(c));
    for (i, enc) in encoders.iter().enumerate() {
        if let Some(only) = restrict_to {
            if i != only {
                continue;
            }
        }
        if enc.can_encode(c) {
            let mut buf = [0u8; 4];
            let byte_len = enc.encode(c.encode_utf8(&mut buf)).len();
            out.push(Candidate {
                mode: QrMode::Byte,
                charset_index: i,
                character_length: 1,
                byte_len,
            });
        }
    }

    out
}

/// Computes and pushes every outgoing edge from a vertex at `position`
/// whose predecessor is described by `prev_idx`/`prev_mode`/`prev_charset`
/// (all `None`/irrelevant at the very start of the string). `prev_charset`
/// is the predecessor's *effective* (inherited) charset, not its raw
/// `charset_index` — see [`Edge::effective_charset`].
fn emit_from(
    lattice: &mut Lattice,
    chars: &[char],
    encoders: &[Box<dyn CharsetEncoder>],
    priority_index: Option<usize>,
    version: QrVersion,
    position: usize,
    prev_idx: Option<usize>,
    prev_mode: Option<QrMode>,
    prev_charset: usize,
    prev_total: u32,
) {
    for cand in candidates(chars, position, encoders, priority_index) {
        let eci_switch = cand.mode == QrMode::Byte
            && match prev_mode {
                None => cand.charset_index != 0,
                Some(_) => cand.charset_index != prev_charset,
            };
        let mode_changed = prev_mode != Some(cand.mode);

        let mut cost = prev_total;
        if prev_mode.is_none() || mode_changed || eci_switch {
            cost += header_cost(cand.mode, version);
        }
        cost += payload_cost(cand.mode, cand.character_length, cand.byte_len);
        if eci_switch {
            cost += 4 + 8;
        }

        // Non-Byte modes inherit the running charset for cost purposes;
        // Byte edges carry their own (§4.4 "Charset inheritance").
        let effective_charset = if cand.mode == QrMode::Byte {
            cand.charset_index
        } else {
            prev_charset
        };

        log::trace!(
            "qr graph: position={position} mode={:?} charset={} len={} cost={cost}",
            cand.mode,
            cand.charset_index,
            cand.character_length
        );

        lattice.push(Edge {
            mode: cand.mode,
            from_position: position,
            charset_index: cand.charset_index,
            character_length: cand.character_length,
            prev: prev_idx,
            cached_total_size: cost,
            effective_charset,
        });
    }
}

/// Runs the single left-to-right sweep and returns the populated lattice,
/// ready for `best_terminal` + backward reconstruction.
pub(crate) fn build_lattice(
    chars: &[char],
    encoders: &[Box<dyn CharsetEncoder>],
    priority_index: Option<usize>,
    version: QrVersion,
) -> Lattice {
    let n = chars.len();
    let mut lattice = Lattice::new(n, encoders.len());

    emit_from(&mut lattice, chars, encoders, priority_index, version, 0, None, None, 0, 0);

    for position in 1..n {
        let winners = lattice.winners_at(position);
        log::trace!("qr graph: relaxing position={position}, {} surviving edge(s)", winners.len());
        for idx in winners {
            let edge = lattice.arena[idx].clone();
            emit_from(
                &mut lattice,
                chars,
                encoders,
                priority_index,
                version,
                position,
                Some(idx),
                Some(edge.mode),
                edge.effective_charset,
                edge.cached_total_size,
            );
        }
    }

    lattice
}

/// Fixed traversal order used when multiple candidates tie on cost, kept
/// here purely as documentation (the bucket relaxation already enforces
/// it via first-seen-wins).
pub(crate) const _MODE_ORDER: [QrMode; 4] = DATA_MODE_ORDER;
