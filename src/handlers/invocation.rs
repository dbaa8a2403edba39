use crate::agent::{InvocationEvent, ResponseEnvelope};
use crate::error::SearchError;
use crate::handlers::search_handler;
use crate::state::AppState;
use serde::Deserialize;
use serde_json::Value;

/// Entry point for a raw invocation payload.
///
/// The payload is read into an [`InvocationEvent`] here. A payload that does
/// not fit still yields a 400 envelope echoing whatever routing fields it
/// carries, never a runtime error.
pub async fn invocation_handler(state: &AppState, payload: Value) -> ResponseEnvelope {
    match InvocationEvent::deserialize(&payload) {
        Ok(event) => search_handler(state, &event).await,
        Err(e) => SearchError::ValidationError(format!("Invalid invocation event: {}", e))
            .into_envelope(&InvocationEvent::routing_from_value(&payload)),
    }
}
