use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StageCardError {
    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO Error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON Parsing Error in {document}: {source}")]
    Json {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stage '{stage_id}' is inconsistent: {reason}")]
    StageDataInconsistent { stage_id: String, reason: String },

    #[error("Output Error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl StageCardError {
    pub fn inconsistent(stage_id: &str, reason: impl Into<String>) -> Self {
        Self::StageDataInconsistent {
            stage_id: stage_id.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ScResult<T> = Result<T, StageCardError>;
