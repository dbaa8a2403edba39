//! Type definitions for the inbound invocation event.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the parameter carrying the natural-language query.
pub const SEARCH_TERM_PARAMETER: &str = "search_term";

/// A single name/value pair from the event's `parameters` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: Option<String>,

    /// Declared parameter type (e.g. `"string"`), informational only.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Any JSON value; only strings are read back by [`InvocationEvent::parameter`].
    #[serde(default)]
    pub value: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some("string".to_string()),
            value: Some(Value::String(value.into())),
        }
    }
}

/// Event delivered by the agent platform for one action invocation.
///
/// Routing fields are optional; the response envelope falls back to
/// defaults when they are absent. Fields the handler does not use are
/// ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    /// Agent session identifier, carried into log records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// The user utterance that led the agent to call this action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
}

impl InvocationEvent {
    /// Event carrying a single `search_term` parameter and no routing fields.
    pub fn with_search_term(term: impl Into<String>) -> Self {
        Self {
            parameters: vec![Parameter::new(SEARCH_TERM_PARAMETER, term)],
            ..Self::default()
        }
    }

    /// String value of the first parameter named `name`, if any.
    ///
    /// Only the first match is considered, even when its value is missing
    /// or not a string.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
            .and_then(|p| p.value.as_ref())
            .and_then(Value::as_str)
    }

    /// Routing fields read straight from a raw payload that could not be
    /// deserialized as a whole. Fields that are absent or not strings stay unset.
    pub fn routing_from_value(payload: &Value) -> Self {
        let field = |key: &str| payload.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            action_group: field("actionGroup"),
            api_path: field("apiPath"),
            http_method: field("httpMethod"),
            session_id: field("sessionId"),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_agent_event() {
        let event: InvocationEvent = serde_json::from_value(json!({
            "messageVersion": "1.0",
            "agent": { "name": "transcripts", "id": "AGENT1", "alias": "TSTALIASID", "version": "DRAFT" },
            "sessionId": "123456789012345",
            "inputText": "what did the customer say about pricing?",
            "actionGroup": "search_transcripts",
            "apiPath": "/search",
            "httpMethod": "GET",
            "parameters": [
                { "name": "search_term", "type": "string", "value": "pricing" }
            ]
        }))
        .unwrap();

        assert_eq!(event.action_group.as_deref(), Some("search_transcripts"));
        assert_eq!(event.http_method.as_deref(), Some("GET"));
        assert_eq!(event.session_id.as_deref(), Some("123456789012345"));
        assert_eq!(event.parameter("search_term"), Some("pricing"));
    }

    #[test]
    fn test_missing_parameters_defaults_to_empty() {
        let event: InvocationEvent = serde_json::from_value(json!({})).unwrap();

        assert!(event.parameters.is_empty());
        assert!(event.action_group.is_none());
        assert_eq!(event.parameter("search_term"), None);
    }

    #[test]
    fn test_parameter_uses_first_match() {
        let event = InvocationEvent {
            parameters: vec![
                Parameter::new("other", "x"),
                Parameter::new("search_term", "first"),
                Parameter::new("search_term", "second"),
            ],
            ..InvocationEvent::default()
        };

        assert_eq!(event.parameter("search_term"), Some("first"));
    }

    #[test]
    fn test_non_string_values_are_accepted() {
        let event: InvocationEvent = serde_json::from_value(json!({
            "parameters": [
                { "name": "limit", "type": "integer", "value": 3 },
                { "name": "search_term", "type": "string", "value": "pricing" }
            ]
        }))
        .unwrap();

        assert_eq!(event.parameter("limit"), None);
        assert_eq!(event.parameter("search_term"), Some("pricing"));
    }

    #[test]
    fn test_non_string_search_term_reads_as_missing() {
        let event: InvocationEvent = serde_json::from_value(json!({
            "parameters": [{ "name": "search_term", "value": 42 }]
        }))
        .unwrap();

        assert_eq!(event.parameter("search_term"), None);
    }

    #[test]
    fn test_routing_from_value() {
        let event = InvocationEvent::routing_from_value(&json!({
            "actionGroup": "ag",
            "apiPath": "/p",
            "httpMethod": 7,
            "parameters": "not a list"
        }));

        assert_eq!(event.action_group.as_deref(), Some("ag"));
        assert_eq!(event.api_path.as_deref(), Some("/p"));
        assert!(event.http_method.is_none());
        assert!(event.parameters.is_empty());

        let empty = InvocationEvent::routing_from_value(&json!("not an object"));
        assert_eq!(empty, InvocationEvent::default());
    }
}
