//! Astra Search - agent action for semantic search over an Astra DB collection
//!
//! This library exposes the handler and its building blocks so the function
//! binary and the integration tests share one implementation.

pub mod agent;
pub mod astra;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

// Re-export key types for convenience
pub use agent::{InvocationEvent, Parameter, ResponseEnvelope};
pub use astra::{AstraClient, Document};
pub use config::Config;
pub use error::{Result, SearchError};
pub use handlers::{invocation_handler, search_handler};
pub use state::AppState;
