use serde::Serialize;
use std::fmt;

/// Hit breakdown for one shooter on one stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodedScore {
    // Paper (plus steel hits/misses folded into A and M)
    pub alpha: u32,
    pub charlie: u32,
    pub delta: u32,
    pub no_score: u32,
    pub miss: u32,
    pub no_penalty_miss: u32,

    // Reported verbatim; never accumulated
    pub procedural: Option<u32>,
}

impl DecodedScore {
    /// `(count, label)` in reporting order, zeros included.
    pub fn categories(&self) -> [(u32, &'static str); 7] {
        [
            (self.alpha, "A"),
            (self.charlie, "C"),
            (self.delta, "D"),
            (self.no_score, "NS"),
            (self.miss, "M"),
            (self.no_penalty_miss, "NPM"),
            (self.procedural.unwrap_or(0), "PE"),
        ]
    }
}

/// `"4A 1C 1M 1PE"`. Zero categories are dropped, so a clean zero renders empty.
impl fmt::Display for DecodedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (count, label) in self.categories() {
            if count == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", count, label)?;
            first = false;
        }
        Ok(())
    }
}
