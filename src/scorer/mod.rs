pub mod decode;
pub mod index;
pub mod types;

pub use self::decode::{decode, score_to_string};
pub use self::index::{ScoreIndex, StageDefIndex};
pub use self::types::DecodedScore;
