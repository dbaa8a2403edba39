use crate::agent::{format_response, InvocationEvent, ResponseEnvelope};
use serde::Serialize;
use thiserror::Error;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum SearchError {
    /// Missing or empty search term, or an event that cannot be read.
    #[error("{0}")]
    ValidationError(String),

    /// The store answered with a body that is not JSON.
    #[error("Invalid JSON format: {0}")]
    ParseError(String),

    /// Connection failure, timeout, non-2xx status, or store-reported error.
    #[error("Astra DB request failed: {0}")]
    TransportError(String),

    /// Anything else, e.g. JSON whose shape does not match the result record.
    #[error("{0}")]
    UnexpectedError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl SearchError {
    pub fn status_code(&self) -> u16 {
        match self {
            SearchError::ValidationError(_) | SearchError::ParseError(_) => STATUS_BAD_REQUEST,
            SearchError::TransportError(_) | SearchError::UnexpectedError(_) => {
                STATUS_INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert the error into the platform envelope with an `error` body.
    pub fn into_envelope(self, event: &InvocationEvent) -> ResponseEnvelope {
        match &self {
            SearchError::ValidationError(msg) => {
                tracing::warn!(error = %msg, "Validation error");
            }
            SearchError::ParseError(msg) => {
                tracing::warn!(error = %msg, "JSON parsing error");
            }
            SearchError::TransportError(msg) => {
                tracing::error!(error = %msg, "Astra DB request error");
            }
            SearchError::UnexpectedError(msg) => {
                tracing::error!(error = %msg, "Unexpected error");
            }
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        format_response(event, status, &body)
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::TransportError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
