use super::{DocumentSource, MatchResource};
use crate::config::DEFAULT_BASE_URL;
use crate::error::ScResult;
use reqwest::Client;
use tracing::debug;

/// Reads match documents from the public score bucket.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, match_id: &str, resource: MatchResource) -> String {
        format!("{}/{}/{}", self.base_url, match_id, resource)
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, match_id: &str, resource: MatchResource) -> ScResult<String> {
        let url = self.url_for(match_id, resource);
        debug!("GET {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        debug!("   -> {} bytes from {}", body.len(), resource);
        Ok(body)
    }
}
