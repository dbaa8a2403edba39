//! Wire types for the `find` command and its response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of documents requested per search.
pub const SEARCH_LIMIT: usize = 5;

/// `{"find": {...}}` request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindCommand {
    pub find: FindSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindSpec {
    pub sort: VectorizeSort,
    pub projection: VectorizeProjection,
    pub options: FindOptions,
}

/// Sort by similarity to the server-side embedding of `vectorize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorizeSort {
    #[serde(rename = "$vectorize")]
    pub vectorize: String,
}

/// Project only the `$vectorize` text of each document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorizeProjection {
    #[serde(rename = "$vectorize")]
    pub vectorize: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOptions {
    pub limit: usize,
    pub include_similarity: bool,
}

impl FindCommand {
    /// Top-`limit` documents most similar to `term`, with similarity scores.
    pub fn similar_to(term: &str, limit: usize) -> Self {
        Self {
            find: FindSpec {
                sort: VectorizeSort {
                    vectorize: term.to_string(),
                },
                projection: VectorizeProjection { vectorize: 1 },
                options: FindOptions {
                    limit,
                    include_similarity: true,
                },
            },
        }
    }
}

/// Response to a `find` command.
///
/// A successful call carries `data.documents`; a failed command comes back
/// with HTTP 200 and a non-empty `errors` list instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindResponse {
    #[serde(default)]
    pub data: Option<FindData>,

    #[serde(default)]
    pub errors: Option<Vec<StoreError>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindData {
    #[serde(default)]
    pub documents: Option<Vec<Document>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    #[serde(rename = "_id", default)]
    pub id: Option<Value>,

    /// Source text the document's vector was computed from.
    #[serde(rename = "$vectorize", default)]
    pub vectorize: Option<String>,

    #[serde(rename = "$similarity", default)]
    pub similarity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreError {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error_code: Option<String>,
}

impl FindResponse {
    /// Joined description of the store-reported errors, if there are any.
    pub fn store_error(&self) -> Option<String> {
        let errors = self.errors.as_ref().filter(|errors| !errors.is_empty())?;

        let described: Vec<String> = errors
            .iter()
            .map(|e| match (&e.error_code, &e.message) {
                (Some(code), Some(message)) => format!("{}: {}", code, message),
                (None, Some(message)) => message.clone(),
                (Some(code), None) => code.clone(),
                (None, None) => "unknown error".to_string(),
            })
            .collect();

        Some(described.join("; "))
    }

    /// Documents in store order; empty when `data.documents` is absent.
    pub fn into_documents(self) -> Vec<Document> {
        self.data.and_then(|d| d.documents).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_command_body() {
        let body = serde_json::to_value(FindCommand::similar_to("refund policy", SEARCH_LIMIT)).unwrap();

        assert_eq!(
            body,
            json!({
                "find": {
                    "sort": { "$vectorize": "refund policy" },
                    "projection": { "$vectorize": 1 },
                    "options": { "limit": 5, "includeSimilarity": true }
                }
            })
        );
    }

    #[test]
    fn test_parse_documents() {
        let response: FindResponse = serde_json::from_value(json!({
            "data": {
                "documents": [
                    { "_id": "a1", "$vectorize": "first", "$similarity": 0.91 },
                    { "_id": "a2" }
                ],
                "nextPageState": null
            }
        }))
        .unwrap();

        assert!(response.store_error().is_none());
        let documents = response.into_documents();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].vectorize.as_deref(), Some("first"));
        assert_eq!(documents[0].similarity, Some(0.91));
        assert!(documents[1].vectorize.is_none());
    }

    #[test]
    fn test_null_vectorize_reads_as_missing() {
        let response: FindResponse = serde_json::from_value(json!({
            "data": { "documents": [{ "$vectorize": null }, { "$vectorize": "kept" }] }
        }))
        .unwrap();

        let documents = response.into_documents();
        assert!(documents[0].vectorize.is_none());
        assert_eq!(documents[1].vectorize.as_deref(), Some("kept"));
    }

    #[test]
    fn test_missing_data_yields_no_documents() {
        let response: FindResponse = serde_json::from_value(json!({ "status": {} })).unwrap();
        assert!(response.into_documents().is_empty());
    }

    #[test]
    fn test_store_error_description() {
        let response: FindResponse = serde_json::from_value(json!({
            "errors": [
                { "errorCode": "COLLECTION_NOT_EXIST", "message": "Collection does not exist" },
                { "message": "second" }
            ]
        }))
        .unwrap();

        assert_eq!(
            response.store_error().as_deref(),
            Some("COLLECTION_NOT_EXIST: Collection does not exist; second")
        );
    }

    #[test]
    fn test_empty_errors_list_is_not_an_error() {
        let response: FindResponse =
            serde_json::from_value(json!({ "data": { "documents": [] }, "errors": [] })).unwrap();
        assert!(response.store_error().is_none());
    }

    #[test]
    fn test_non_string_vectorize_is_rejected() {
        let result = serde_json::from_value::<FindResponse>(json!({
            "data": { "documents": [{ "$vectorize": 7 }] }
        }));
        assert!(result.is_err());
    }
}
