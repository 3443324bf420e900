use super::de::lenient_u32;
use serde::{Deserialize, Serialize};

/// Raw per-shooter score for one stage, as stored in `match_scores.json`.
///
/// Only the fields needed for the hit breakdown are kept; the service also
/// ships timing strings, device metadata and approval flags.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RawScoreRecord {
    #[serde(rename = "shtr")]
    pub shooter_id: String,
    /// Steel misses, counted as extra "M".
    #[serde(rename = "popm", default, deserialize_with = "lenient_u32")]
    pub steel_misses: u32,
    /// Steel hits, counted as extra "A".
    #[serde(rename = "poph", default, deserialize_with = "lenient_u32")]
    pub steel_hits: u32,
    #[serde(rename = "proc", default)]
    pub procedural_count: Option<u32>,
    /// One packed hit bitfield per paper target.
    #[serde(rename = "ts", default)]
    pub target_hits: Option<Vec<u64>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StageScoreBlock {
    #[serde(rename = "stage_uuid")]
    pub stage_id: String,
    #[serde(rename = "stage_stagescores", default)]
    pub scores: Vec<RawScoreRecord>,
}

/// `match_scores.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MatchScores {
    #[serde(rename = "match_scores", default)]
    pub stages: Vec<StageScoreBlock>,
}
