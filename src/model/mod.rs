//! Upstream document shapes for the three files the results service publishes
//! per match.

pub mod de;
pub mod definition;
pub mod results;
pub mod scores;

pub use self::definition::{MatchDefinition, StageDefinition};
pub use self::results::{MatchResults, ShooterStanding, StageResultEntry};
pub use self::scores::{MatchScores, RawScoreRecord, StageScoreBlock};

/// The three documents for one match, fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchDocuments {
    pub results: MatchResults,
    pub scores: MatchScores,
    pub definition: MatchDefinition,
}
