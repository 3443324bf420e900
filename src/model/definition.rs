use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StageDefinition {
    #[serde(rename = "stage_uuid")]
    pub stage_id: String,
    #[serde(rename = "stage_name", default)]
    pub name: Option<String>,
    #[serde(rename = "stage_classifiercode", default)]
    pub classifier_code: Option<String>,
}

impl StageDefinition {
    /// Non-classifier stages carry an empty code upstream.
    pub fn classifier(&self) -> Option<&str> {
        self.classifier_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// `match_def.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MatchDefinition {
    #[serde(rename = "match_name", default)]
    pub match_name: String,
    #[serde(rename = "match_stages", default)]
    pub stages: Vec<StageDefinition>,
}
