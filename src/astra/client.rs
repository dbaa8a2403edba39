use crate::astra::types::{Document, FindCommand, FindResponse, SEARCH_LIMIT};
use crate::config::Config;
use crate::error::{Result, SearchError};
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;

/// Header carrying the Astra application token.
pub const TOKEN_HEADER: &str = "X-Cassandra-Token";

/// HTTP client bound to one collection.
///
/// Built once per process. Idle connections are not pooled, so each
/// invocation opens its own connection and nothing is reused between calls.
pub struct AstraClient {
    http: Client,
    url: String,
    token: Option<String>,
}

impl AstraClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder().pool_max_idle_per_host(0);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            http,
            url: config.collection_url(),
            token: config.astra_token.clone(),
        })
    }

    /// Collection URL every search is posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run a vector `find` for `term` and return the matching documents.
    ///
    /// Single attempt. Errors are classified as:
    /// - connection failure, timeout, non-2xx, store-reported errors: `TransportError`
    /// - body that is not JSON: `ParseError`
    /// - body that is not UTF-8, or JSON that does not fit [`FindResponse`]: `UnexpectedError`
    pub async fn find_similar(&self, term: &str) -> Result<Vec<Document>> {
        let command = FindCommand::similar_to(term, SEARCH_LIMIT);
        let start = Instant::now();

        let mut request = self.http.post(&self.url).json(&command);
        if let Some(token) = &self.token {
            request = request.header(TOKEN_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();

        tracing::debug!(
            url = %self.url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Astra DB responded"
        );

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.trim();
            return Err(SearchError::TransportError(if text.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, text)
            }));
        }

        let bytes = response.bytes().await?;
        let text = std::str::from_utf8(&bytes).map_err(|e| {
            SearchError::UnexpectedError(format!("Astra DB response is not UTF-8: {}", e))
        })?;
        let payload: Value =
            serde_json::from_str(text).map_err(|e| SearchError::ParseError(e.to_string()))?;
        let parsed: FindResponse = serde_json::from_value(payload).map_err(|e| {
            SearchError::UnexpectedError(format!("Unexpected response from Astra DB: {}", e))
        })?;

        if let Some(message) = parsed.store_error() {
            return Err(SearchError::TransportError(message));
        }

        Ok(parsed.into_documents())
    }
}
