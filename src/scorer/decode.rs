use super::DecodedScore;
use crate::model::RawScoreRecord;

// --- PACKED TARGET LAYOUT ---
// Each paper target is one integer. Counts sit in 4-bit nibbles:
//   A   - 1        (bits 0-3, field is 8 bits wide)
//   C   - 256      (bits 8-11)
//   D   - 4096     (bits 12-15)
//   NS  - 65536    (bits 16-19)
//   M   - 1048576  (bits 20-23)
//   NPM - 16777216 (bits 24-27)
pub const NIBBLE_MASK: u64 = 0b1111;
pub const ALPHA_WIDTH: u32 = 8;
pub const CHARLIE_WIDTH: u32 = 4;
pub const DELTA_WIDTH: u32 = 4;
pub const NO_SCORE_WIDTH: u32 = 4;
pub const MISS_WIDTH: u32 = 4;

/// Per-target counts pulled out of one packed integer, in field order
/// A, C, D, NS, M, NPM.
pub fn unpack_target(packed: u64) -> [u32; 6] {
    let mut t = packed;
    let mut take = |width: u32| {
        let n = (t & NIBBLE_MASK) as u32;
        t >>= width;
        n
    };

    let a = take(ALPHA_WIDTH);
    let c = take(CHARLIE_WIDTH);
    let d = take(DELTA_WIDTH);
    let ns = take(NO_SCORE_WIDTH);
    let m = take(MISS_WIDTH);
    let npm = take(0);
    [a, c, d, ns, m, npm]
}

/// Inverse of [`unpack_target`] for nibbles in `0..=15`.
pub fn pack_target(counts: [u32; 6]) -> u64 {
    let [a, c, d, ns, m, npm] = counts.map(|n| n as u64 & NIBBLE_MASK);
    a | c << 8 | d << 12 | ns << 16 | m << 20 | npm << 24
}

/// Decode a raw score. `None` means nothing was ever recorded for this
/// shooter on this stage, and stays `None`.
pub fn decode(record: Option<&RawScoreRecord>) -> Option<DecodedScore> {
    let record = record?;

    let mut score = DecodedScore {
        alpha: record.steel_hits,
        miss: record.steel_misses,
        procedural: record.procedural_count,
        ..Default::default()
    };

    // Nibbles are trusted as-is; saturate rather than wrap on absurd input.
    for &packed in record.target_hits.as_deref().unwrap_or_default() {
        let [a, c, d, ns, m, npm] = unpack_target(packed);
        score.alpha = score.alpha.saturating_add(a);
        score.charlie = score.charlie.saturating_add(c);
        score.delta = score.delta.saturating_add(d);
        score.no_score = score.no_score.saturating_add(ns);
        score.miss = score.miss.saturating_add(m);
        score.no_penalty_miss = score.no_penalty_miss.saturating_add(npm);
    }

    Some(score)
}

/// Decode and render in one step; an absent record renders as `""`.
pub fn score_to_string(record: Option<&RawScoreRecord>) -> String {
    decode(record).map(|s| s.to_string()).unwrap_or_default()
}
