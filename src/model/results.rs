use super::de::{lenient_u32, ReportedNumber};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One competitor's line in a stage's division standings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShooterStanding {
    pub shooter_name: String,
    #[serde(rename = "shooter", alias = "shooterId")]
    pub shooter_id: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub place: u32,
    #[serde(default)]
    pub stage_percent: ReportedNumber,
    #[serde(default)]
    pub stage_time_secs: ReportedNumber,
    #[serde(default)]
    pub hit_factor: ReportedNumber,
}

/// A stage entry from `results.json`, reshaped into explicit fields.
///
/// Upstream stores the stage name as the *key* of the standings property,
/// next to `stageUUID`. The adapter below lifts it into `stage_name`.
#[derive(Debug, Clone, PartialEq)]
pub struct StageResultEntry {
    pub stage_id: String,
    pub stage_name: String,
    pub divisions: HashMap<String, Vec<ShooterStanding>>,
}

impl StageResultEntry {
    /// Primary label first, alternate second. `None` when neither is present.
    pub fn standings(&self, division: &str, division_alt: &str) -> Option<&[ShooterStanding]> {
        self.divisions
            .get(division)
            .or_else(|| self.divisions.get(division_alt))
            .map(Vec::as_slice)
    }

    /// A missing `stageUUID` leaves `stage_id` empty; the assembler only
    /// needs it for stages where the shooter actually appears.
    fn from_raw(mut raw: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let stage_id = match raw.remove("stageUUID") {
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(serde_json::Error::custom(format!(
                    "stageUUID must be a string, got {}",
                    other
                )))
            }
            None => String::new(),
        };

        let (stage_name, standings) = raw
            .into_iter()
            .find(|(_, v)| v.is_object() || v.is_array())
            .ok_or_else(|| {
                serde_json::Error::custom(format!("stage '{}' has no standings property", stage_id))
            })?;

        let divisions = parse_divisions(standings)?;

        Ok(Self {
            stage_id,
            stage_name,
            divisions,
        })
    }
}

/// Standings come either as `{label: [...]}` or as `[{label: [...]}, ...]`.
/// In the list form the first occurrence of a label wins.
fn parse_divisions(value: Value) -> Result<HashMap<String, Vec<ShooterStanding>>, serde_json::Error> {
    let mut divisions = HashMap::new();
    let groups = match value {
        Value::Object(map) => vec![map],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    for group in groups {
        for (label, shooters) in group {
            if divisions.contains_key(&label) {
                continue;
            }
            let parsed: Vec<ShooterStanding> = serde_json::from_value(shooters)?;
            divisions.insert(label, parsed);
        }
    }
    Ok(divisions)
}

/// `results.json`: a header entry followed by one entry per stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResults {
    pub stages: Vec<StageResultEntry>,
}

impl<'de> Deserialize<'de> for MatchResults {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries: Vec<Map<String, Value>> = Vec::deserialize(deserializer)?;
        let stages = entries
            .into_iter()
            .skip(1)
            .map(StageResultEntry::from_raw)
            .collect::<Result<Vec<_>, _>>()
            .map_err(D::Error::custom)?;
        Ok(Self { stages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!([
            {"matchName": "Winter Classic", "Match": [{"Overall": []}]},
            {
                "stageUUID": "s1",
                "Stage 1 - Hallway": [
                    {"Overall": [{"shooterName": "Wang, Ken", "shooter": "id1", "place": 7}]},
                    {"CO": [{"shooterName": "Wang, Ken", "shooter": "id1", "place": 2,
                             "stagePercent": 91.2, "stageTimeSecs": "12.34", "hitFactor": 9.1}]}
                ]
            },
            {
                "stageUUID": "s2",
                "Stage 2": {"Carry Optics": []}
            }
        ])
    }

    #[test]
    fn header_is_skipped_and_names_are_lifted() {
        let results: MatchResults = serde_json::from_value(doc()).unwrap();
        assert_eq!(results.stages.len(), 2);
        assert_eq!(results.stages[0].stage_id, "s1");
        assert_eq!(results.stages[0].stage_name, "Stage 1 - Hallway");
        assert_eq!(results.stages[1].stage_name, "Stage 2");
    }

    #[test]
    fn list_shaped_divisions_are_flattened() {
        let results: MatchResults = serde_json::from_value(doc()).unwrap();
        let stage = &results.stages[0];
        assert!(stage.divisions.contains_key("Overall"));
        let co = stage.standings("Carry Optics", "CO").unwrap();
        assert_eq!(co[0].place, 2);
        assert_eq!(co[0].stage_time_secs.value(), 12.34);
        assert_eq!(co[0].stage_time_secs.as_str(), "12.34");
    }

    #[test]
    fn primary_label_beats_alternate() {
        let results: MatchResults = serde_json::from_value(doc()).unwrap();
        let stage = &results.stages[1];
        assert_eq!(stage.standings("Carry Optics", "CO").map(|s| s.len()), Some(0));
        assert!(stage.standings("Open", "OPN").is_none());
    }

    #[test]
    fn missing_stage_uuid_still_parses() {
        let doc = json!([{}, {"Stage 1": {"CO": []}}]);
        let results: MatchResults = serde_json::from_value(doc).unwrap();
        assert_eq!(results.stages[0].stage_id, "");
        assert_eq!(results.stages[0].stage_name, "Stage 1");
    }

    #[test]
    fn non_string_stage_uuid_is_a_parse_error() {
        let bad = json!([{}, {"stageUUID": 7, "Stage 1": {"CO": []}}]);
        assert!(serde_json::from_value::<MatchResults>(bad).is_err());
    }

    #[test]
    fn stage_without_standings_is_a_parse_error() {
        let bad = json!([{}, {"stageUUID": "s1", "note": "scalar only"}]);
        assert!(serde_json::from_value::<MatchResults>(bad).is_err());
    }
}
