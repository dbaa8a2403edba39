//! Response envelope required by the agent platform.

use crate::agent::InvocationEvent;
use serde::{Deserialize, Serialize};

pub const MESSAGE_VERSION: &str = "1.0";
pub const DEFAULT_ACTION_GROUP: &str = "default";
pub const DEFAULT_API_PATH: &str = "/search";
pub const DEFAULT_HTTP_METHOD: &str = "POST";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub message_version: String,
    pub response: ActionResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub action_group: String,
    pub api_path: String,
    pub http_method: String,
    pub http_status_code: u16,
    pub response_body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "application/json")]
    pub application_json: JsonBody,
}

/// The body is a JSON document encoded as a string, not a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonBody {
    pub body: String,
}

impl ResponseEnvelope {
    pub fn status_code(&self) -> u16 {
        self.response.http_status_code
    }

    /// Raw body string as delivered to the agent.
    pub fn body(&self) -> &str {
        &self.response.response_body.application_json.body
    }

    /// Decode the body string back into JSON.
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(self.body())
    }
}

/// Wrap `body` in the platform envelope, echoing the event's routing fields.
pub fn format_response<T: Serialize>(
    event: &InvocationEvent,
    status_code: u16,
    body: &T,
) -> ResponseEnvelope {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to serialize response body");
        serde_json::json!({ "error": e.to_string() }).to_string()
    });

    ResponseEnvelope {
        message_version: MESSAGE_VERSION.to_string(),
        response: ActionResponse {
            action_group: event
                .action_group
                .clone()
                .unwrap_or_else(|| DEFAULT_ACTION_GROUP.to_string()),
            api_path: event
                .api_path
                .clone()
                .unwrap_or_else(|| DEFAULT_API_PATH.to_string()),
            http_method: event
                .http_method
                .clone()
                .unwrap_or_else(|| DEFAULT_HTTP_METHOD.to_string()),
            http_status_code: status_code,
            response_body: ResponseBody {
                application_json: JsonBody { body },
            },
        },
    }
}
