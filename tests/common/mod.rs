#![allow(dead_code)]

use serde_json::{json, Value};
use stagecard::model::MatchDocuments;

pub const SHOOTER: &str = "Wang, Ken";

/// Three stages: s1 scored under "Carry Optics", s2 only under "CO",
/// s3 where the shooter did not appear.
pub fn results_json() -> Value {
    json!([
        {"matchName": "Winter Classic", "Match": [{"Overall": []}]},
        {
            "stageUUID": "s1",
            "Stage 1": {
                "Carry Optics": [
                    {"shooterName": "Doe, Jane", "shooter": "id2", "place": 1,
                     "stagePercent": 100, "stageTimeSecs": 10.5, "hitFactor": 10.0},
                    {"shooterName": SHOOTER, "shooter": "id1", "place": 2,
                     "stagePercent": 91.2, "stageTimeSecs": 12.34, "hitFactor": 9.1}
                ]
            }
        },
        {
            "stageUUID": "s2",
            "Stage 2": [
                {"Overall": [{"shooterName": SHOOTER, "shooter": "id1", "place": 40}]},
                {"CO": [
                    {"shooterName": SHOOTER, "shooter": "id1", "place": 1,
                     "stagePercent": 95.5, "stageTimeSecs": 20.01, "hitFactor": 6.25}
                ]}
            ]
        },
        {
            "stageUUID": "s3",
            "Stage 3": {
                "Carry Optics": [
                    {"shooterName": "Doe, Jane", "shooter": "id2", "place": 1,
                     "stagePercent": 100, "stageTimeSecs": 8, "hitFactor": 7.5}
                ]
            }
        }
    ])
}

pub fn scores_json() -> Value {
    json!({
        "match_scores": [
            {"stage_uuid": "s1", "stage_stagescores": [
                {"shtr": "id1", "poph": 2, "popm": 0, "ts": [1, 257], "proc": 0},
                {"shtr": "id2", "ts": [2, 2]}
            ]},
            {"stage_uuid": "s2", "stage_stagescores": [
                {"shtr": "id1", "poph": 5, "popm": 1}
            ]},
            {"stage_uuid": "s3", "stage_stagescores": []}
        ]
    })
}

pub fn definition_json() -> Value {
    json!({
        "match_name": "Winter Classic",
        "match_stages": [
            {"stage_uuid": "s1", "stage_name": "Stage 1", "stage_classifiercode": "99-11"},
            {"stage_uuid": "s2", "stage_name": "Stage 2", "stage_classifiercode": ""},
            {"stage_uuid": "s3", "stage_name": "Stage 3"}
        ]
    })
}

pub fn documents() -> MatchDocuments {
    MatchDocuments {
        results: serde_json::from_value(results_json()).unwrap(),
        scores: serde_json::from_value(scores_json()).unwrap(),
        definition: serde_json::from_value(definition_json()).unwrap(),
    }
}
