pub mod dir;
pub mod http;

pub use self::dir::DirSource;
pub use self::http::HttpSource;

use crate::error::{ScResult, StageCardError};
use crate::model::MatchDocuments;
use serde::de::DeserializeOwned;
use strum_macros::Display;
use tracing::info;

/// The three per-match files published by the results service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MatchResource {
    #[strum(serialize = "results.json")]
    Results,
    #[strum(serialize = "match_scores.json")]
    Scores,
    #[strum(serialize = "match_def.json")]
    Definition,
}

impl MatchResource {
    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

/// Somewhere the raw JSON bodies for a match can be read from.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn fetch(&self, match_id: &str, resource: MatchResource) -> ScResult<String>;
}

async fn fetch_parsed<S, T>(source: &S, match_id: &str, resource: MatchResource) -> ScResult<T>
where
    S: DocumentSource,
    T: DeserializeOwned,
{
    let body = source.fetch(match_id, resource).await?;
    serde_json::from_str(&body).map_err(|source| StageCardError::Json {
        document: resource.file_name(),
        source,
    })
}

/// Fetch all three documents concurrently. The first failure wins.
pub async fn load_match<S: DocumentSource>(source: &S, match_id: &str) -> ScResult<MatchDocuments> {
    info!("📥 Fetching documents for match {}", match_id);

    let (results, scores, definition) = tokio::try_join!(
        fetch_parsed(source, match_id, MatchResource::Results),
        fetch_parsed(source, match_id, MatchResource::Scores),
        fetch_parsed(source, match_id, MatchResource::Definition),
    )?;

    Ok(MatchDocuments {
        results,
        scores,
        definition,
    })
}
