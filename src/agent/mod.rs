//! Invocation records exchanged with the agent platform.
//!
//! The platform calls the function with an [`InvocationEvent`] and expects a
//! [`ResponseEnvelope`] back on every path, including failures.

pub mod envelope;
pub mod types;

pub use envelope::{format_response, ActionResponse, JsonBody, ResponseBody, ResponseEnvelope};
pub use types::{InvocationEvent, Parameter};
