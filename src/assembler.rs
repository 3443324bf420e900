use crate::config::ReportConfig;
use crate::error::{ScResult, StageCardError};
use crate::model::de::ReportedNumber;
use crate::model::{MatchDocuments, MatchResults, StageResultEntry};
use crate::scorer::{decode, DecodedScore, ScoreIndex, StageDefIndex};
use serde::Serialize;
use tracing::{debug, info};

/// The target shooter's numbers on one stage.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StagePerformance {
    pub place: u32,
    pub shooter_count: usize,
    pub stage_percent: ReportedNumber,
    pub stage_time_secs: ReportedNumber,
    pub hit_factor: ReportedNumber,
    /// `None` when the shooter is listed but no score was recorded.
    pub score: Option<DecodedScore>,
}

impl StagePerformance {
    pub fn score_text(&self) -> String {
        self.score.map(|s| s.to_string()).unwrap_or_default()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageReport {
    pub stage_id: String,
    pub stage_name: String,
    pub classifier: Option<String>,
    /// `None` when the shooter does not appear in this stage's standings.
    pub performance: Option<StagePerformance>,
}

impl StageReport {
    /// Stage name plus the classifier annotation, e.g. `"Stage 3 (CM 99-11)"`.
    pub fn title(&self) -> String {
        match &self.classifier {
            Some(code) => format!("{} (CM {})", self.stage_name, code),
            None => self.stage_name.clone(),
        }
    }

    /// The printed block. A no-show stage is just its name.
    pub fn lines(&self) -> Vec<String> {
        let Some(p) = &self.performance else {
            return vec![self.stage_name.clone()];
        };
        vec![
            self.title(),
            format!("{}/{} {}%", p.place, p.shooter_count, p.stage_percent),
            p.score_text(),
            format!("Time {}s", p.stage_time_secs),
            format!("HF {}", p.hit_factor),
        ]
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub match_name: String,
    pub shooter_name: String,
    pub stages: Vec<StageReport>,
}

/// Joins standings, raw scores and stage definitions for one shooter.
pub struct ReportAssembler {
    config: ReportConfig,
    scores: ScoreIndex,
    stage_defs: StageDefIndex,
}

impl ReportAssembler {
    pub fn new(config: ReportConfig, scores: ScoreIndex, stage_defs: StageDefIndex) -> Self {
        Self {
            config,
            scores,
            stage_defs,
        }
    }

    pub fn from_documents(config: ReportConfig, docs: &MatchDocuments) -> Self {
        let scores = ScoreIndex::build(&docs.scores);
        let stage_defs = StageDefIndex::build(&docs.definition);
        Self::new(config, scores, stage_defs)
    }

    pub fn assemble_stage(&self, stage: &StageResultEntry) -> ScResult<StageReport> {
        let cfg = &self.config;
        let standings = stage
            .standings(&cfg.division, &cfg.division_alt)
            .ok_or_else(|| {
                StageCardError::inconsistent(
                    &stage.stage_id,
                    format!(
                        "no standings for division '{}' or '{}'",
                        cfg.division, cfg.division_alt
                    ),
                )
            })?;

        let classifier = self.stage_defs.classifier(&stage.stage_id).map(str::to_string);

        let Some(shooter) = standings
            .iter()
            .find(|s| s.shooter_name == cfg.shooter_name)
        else {
            debug!(
                "'{}' not found in {} ({} shooters)",
                cfg.shooter_name,
                stage.stage_name,
                standings.len()
            );
            return Ok(StageReport {
                stage_id: stage.stage_id.clone(),
                stage_name: stage.stage_name.clone(),
                classifier,
                performance: None,
            });
        };

        if stage.stage_id.is_empty() {
            return Err(StageCardError::inconsistent(
                &stage.stage_name,
                "stage has no stageUUID",
            ));
        }

        let stage_scores = self.scores.stage(&stage.stage_id).ok_or_else(|| {
            StageCardError::inconsistent(&stage.stage_id, "stage is missing from match scores")
        })?;
        let score = decode(stage_scores.get(&shooter.shooter_id));
        if score.is_none() {
            debug!(
                "No score recorded for {} on {}",
                shooter.shooter_id, stage.stage_name
            );
        }

        Ok(StageReport {
            stage_id: stage.stage_id.clone(),
            stage_name: stage.stage_name.clone(),
            classifier,
            performance: Some(StagePerformance {
                place: shooter.place,
                shooter_count: standings.len(),
                stage_percent: shooter.stage_percent.clone(),
                stage_time_secs: shooter.stage_time_secs.clone(),
                hit_factor: shooter.hit_factor.clone(),
                score,
            }),
        })
    }

    /// One report per stage, in document order. Any inconsistency aborts the run.
    pub fn assemble(&self, results: &MatchResults) -> ScResult<Vec<StageReport>> {
        results
            .stages
            .iter()
            .map(|stage| self.assemble_stage(stage))
            .collect()
    }
}

/// Index the documents and assemble the full match report.
pub fn build_report(config: &ReportConfig, docs: &MatchDocuments) -> ScResult<MatchReport> {
    let assembler = ReportAssembler::from_documents(config.clone(), docs);
    let stages = assembler.assemble(&docs.results)?;

    let shot = stages.iter().filter(|s| s.performance.is_some()).count();
    info!(
        "📋 {}: {} of {} stages found for '{}'",
        docs.definition.match_name,
        shot,
        stages.len(),
        config.shooter_name
    );

    Ok(MatchReport {
        match_name: docs.definition.match_name.clone(),
        shooter_name: config.shooter_name.clone(),
        stages,
    })
}
