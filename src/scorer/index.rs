use crate::model::{MatchDefinition, MatchScores, RawScoreRecord, StageDefinition};
use std::collections::HashMap;
use tracing::debug;

/// `stage id -> shooter id -> raw record`. Later duplicates overwrite earlier ones.
#[derive(Debug, Default, Clone)]
pub struct ScoreIndex {
    stages: HashMap<String, HashMap<String, RawScoreRecord>>,
}

impl ScoreIndex {
    pub fn build(scores: &MatchScores) -> Self {
        let mut stages: HashMap<String, HashMap<String, RawScoreRecord>> = HashMap::new();
        let mut records = 0;

        for block in &scores.stages {
            let shooters: HashMap<String, RawScoreRecord> = block
                .scores
                .iter()
                .map(|rec| (rec.shooter_id.clone(), rec.clone()))
                .collect();
            records += block.scores.len();
            stages.insert(block.stage_id.clone(), shooters);
        }

        debug!(
            "Indexed {} score records across {} stages",
            records,
            stages.len()
        );
        Self { stages }
    }

    /// `None` when the stage itself was never scored.
    pub fn stage(&self, stage_id: &str) -> Option<&HashMap<String, RawScoreRecord>> {
        self.stages.get(stage_id)
    }

    pub fn get(&self, stage_id: &str, shooter_id: &str) -> Option<&RawScoreRecord> {
        self.stage(stage_id)?.get(shooter_id)
    }
}

/// `stage id -> definition`. Same overwrite rule as [`ScoreIndex`].
#[derive(Debug, Default, Clone)]
pub struct StageDefIndex {
    stages: HashMap<String, StageDefinition>,
}

impl StageDefIndex {
    pub fn build(definition: &MatchDefinition) -> Self {
        let stages: HashMap<String, StageDefinition> = definition
            .stages
            .iter()
            .map(|s| (s.stage_id.clone(), s.clone()))
            .collect();
        debug!("Indexed {} stage definitions", stages.len());
        Self { stages }
    }

    pub fn get(&self, stage_id: &str) -> Option<&StageDefinition> {
        self.stages.get(stage_id)
    }

    pub fn classifier(&self, stage_id: &str) -> Option<&str> {
        self.get(stage_id)?.classifier()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StageScoreBlock;

    fn record(id: &str, steel_hits: u32) -> RawScoreRecord {
        RawScoreRecord {
            shooter_id: id.to_string(),
            steel_hits,
            ..Default::default()
        }
    }

    #[test]
    fn later_duplicates_overwrite() {
        let scores = MatchScores {
            stages: vec![StageScoreBlock {
                stage_id: "s1".to_string(),
                scores: vec![record("id1", 1), record("id1", 9)],
            }],
        };
        let index = ScoreIndex::build(&scores);
        assert_eq!(index.get("s1", "id1").map(|r| r.steel_hits), Some(9));
        assert!(index.get("s1", "nobody").is_none());
        assert!(index.stage("s2").is_none());
    }

    #[test]
    fn stage_defs_expose_classifier() {
        let def = MatchDefinition {
            match_name: "Club Match".to_string(),
            stages: vec![
                StageDefinition {
                    stage_id: "s1".to_string(),
                    classifier_code: Some("99-11".to_string()),
                    ..Default::default()
                },
                StageDefinition {
                    stage_id: "s2".to_string(),
                    classifier_code: Some(String::new()),
                    ..Default::default()
                },
            ],
        };
        assert!(StageDefIndex::build(&MatchDefinition::default()).is_empty());

        let index = StageDefIndex::build(&def);
        assert!(!index.is_empty());
        assert_eq!(index.len(), 2);
        assert_eq!(index.classifier("s1"), Some("99-11"));
        assert_eq!(index.classifier("s2"), None);
        assert_eq!(index.classifier("s3"), None);
    }
}
