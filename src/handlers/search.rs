//! Semantic search action.
//!
//! Pulls the `search_term` parameter out of the agent event, asks Astra DB
//! for the most similar documents and returns their text to the agent.

use crate::agent::types::SEARCH_TERM_PARAMETER;
use crate::agent::{format_response, InvocationEvent, ResponseEnvelope};
use crate::astra::Document;
use crate::error::{Result, SearchError, STATUS_OK};
use crate::state::AppState;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_term: String,
    /// Document texts in similarity order.
    pub results: Vec<String>,
    pub result_count: usize,
}

/// Search term from the first `search_term` parameter; empty counts as missing.
pub fn extract_search_term(event: &InvocationEvent) -> Result<String> {
    match event.parameter(SEARCH_TERM_PARAMETER) {
        Some(term) if !term.is_empty() => Ok(term.to_string()),
        _ => Err(SearchError::ValidationError(
            "search_term is required".to_string(),
        )),
    }
}

/// Text of every document that has `$vectorize`, in source order.
pub fn clean_results(documents: Vec<Document>) -> Vec<String> {
    documents.into_iter().filter_map(|d| d.vectorize).collect()
}

/// Handle one search invocation.
///
/// # Flow
/// 1. Extract `search_term` (400 before any remote call if missing)
/// 2. POST a vector `find` to the configured collection
/// 3. Keep the `$vectorize` text of each returned document
/// 4. Wrap the result, or the error, in the platform envelope
pub async fn search_handler(state: &AppState, event: &InvocationEvent) -> ResponseEnvelope {
    let start_time = Instant::now();
    tracing::debug!(event = ?event, "Received invocation event");

    let envelope = match run_search(state, event).await {
        Ok(response) => format_response(event, STATUS_OK, &response),
        Err(err) => err.into_envelope(event),
    };

    let status = envelope.status_code().to_string();
    metrics::counter!("search_requests_total", "status" => status).increment(1);
    metrics::histogram!("search_latency_ms").record(start_time.elapsed().as_millis() as f64);

    envelope
}

async fn run_search(state: &AppState, event: &InvocationEvent) -> Result<SearchResponse> {
    let search_term = extract_search_term(event)?;
    tracing::info!(
        search_term = %search_term,
        session_id = event.session_id.as_deref().unwrap_or(""),
        input_text = event.input_text.as_deref().unwrap_or(""),
        "Searching collection"
    );

    let documents = state.client.find_similar(&search_term).await?;
    for doc in &documents {
        tracing::debug!(id = ?doc.id, similarity = ?doc.similarity, "Matched document");
    }

    let results = clean_results(documents);
    tracing::debug!(results = ?results, "Cleaned results");
    tracing::info!(result_count = results.len(), "Search completed");
    metrics::histogram!("search_results_count").record(results.len() as f64);

    Ok(SearchResponse {
        search_term,
        result_count: results.len(),
        results,
    })
}
