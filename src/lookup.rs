//! Person summary lookup
//!
//! Fetches a one-sentence biography from an encyclopedia summary endpoint.
//! Every failure (network, status, body, missing fields) collapses into
//! `None`; callers never see an error.

use crate::config::Config;
use crate::error::{FridayError, FridayResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Title plus first sentence of a summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSummary {
    pub name: String,
    pub extract: String,
}

/// Summary service seam
#[async_trait]
pub trait PersonLookup: Send + Sync {
    /// One attempt; `None` when no usable data came back
    async fn lookup(&self, name: &str) -> Option<PersonSummary>;
}

/// Summary endpoint response (only the fields we read)
#[derive(Debug, Deserialize)]
struct SummaryPayload {
    title: Option<String>,
    extract: Option<String>,
}

/// Client for the Wikipedia REST summary endpoint
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl WikipediaClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("friday/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                warn!("⚠️ Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self::with_client(client, endpoint, timeout)
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.summary_endpoint.clone(), config.lookup_timeout())
    }

    /// Summary URL for a person, name URL-encoded
    pub fn summary_url(&self, name: &str) -> String {
        format!("{}/{}", self.endpoint, urlencoding::encode(name))
    }

    async fn fetch(&self, name: &str) -> FridayResult<PersonSummary> {
        let url = self.summary_url(name);
        debug!("🌐 Fetching summary: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FridayError::Lookup(format!("status {}", status)));
        }

        let body = response.text().await?;
        parse_summary(&body)
    }
}

#[async_trait]
impl PersonLookup for WikipediaClient {
    async fn lookup(&self, name: &str) -> Option<PersonSummary> {
        match self.fetch(name).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("❌ Summary lookup for '{}' failed: {}", name, e);
                None
            }
        }
    }
}

/// Parse a summary body into title + first sentence
pub fn parse_summary(body: &str) -> FridayResult<PersonSummary> {
    let payload: SummaryPayload = serde_json::from_str(body)?;

    let title = payload.title.filter(|t| !t.is_empty());
    let extract = payload.extract.filter(|e| !e.is_empty());

    match (title, extract) {
        (Some(name), Some(extract)) => Ok(PersonSummary {
            name,
            extract: first_sentence(&extract).to_string(),
        }),
        _ => Err(FridayError::Lookup(
            "summary is missing title or extract".to_string(),
        )),
    }
}

/// Text before the first '.', or the whole text when there is none
pub fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or(text)
}
