use std::env;
use std::time::Duration;

/// Keyspace used when `keyspace` is not set.
pub const DEFAULT_KEYSPACE: &str = "default_keyspace";

/// Collection used when `collection` is not set.
pub const DEFAULT_COLLECTION: &str = "rag_filetranscript";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable single-line records.
    #[default]
    Text,
    /// One JSON object per record, for log pipelines that index fields.
    Json,
}

impl LogFormat {
    fn parse(value: Option<String>) -> Self {
        match value.unwrap_or_default().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Astra DB Data API, e.g. `https://<db>-<region>.apps.astra.datastax.com`.
    pub astra_endpoint: String,
    /// Application token sent as `X-Cassandra-Token`. Not validated here.
    pub astra_token: Option<String>,
    pub keyspace: String,
    pub collection: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl Config {
    /// Configuration pointing at `endpoint` with default keyspace and collection.
    pub fn new(astra_endpoint: impl Into<String>, astra_token: Option<String>) -> Self {
        Self {
            astra_endpoint: astra_endpoint.into(),
            astra_token,
            keyspace: DEFAULT_KEYSPACE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            request_timeout: None,
            log_format: LogFormat::Text,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Called once at cold start; the resulting value is shared read-only by
    /// every invocation the process serves.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `astra_token` and `astra_endpoint` are passed through unchecked: a
    /// missing endpoint becomes an empty base URL and fails at request time.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout = match lookup("ASTRA_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    anyhow::anyhow!("ASTRA_TIMEOUT_SECS must be a whole number of seconds: {}", e)
                })?;
                if secs == 0 {
                    anyhow::bail!("ASTRA_TIMEOUT_SECS must be greater than zero");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            astra_endpoint: lookup("astra_endpoint").unwrap_or_default(),
            astra_token: lookup("astra_token"),
            keyspace: lookup("keyspace").unwrap_or_else(|| DEFAULT_KEYSPACE.to_string()),
            collection: lookup("collection").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            request_timeout,
            log_format: LogFormat::parse(lookup("LOG_FORMAT")),
        })
    }

    /// Data API URL of the configured collection.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/api/json/v1/{}/{}",
            self.astra_endpoint.trim_end_matches('/'),
            self.keyspace,
            self.collection
        )
    }
}
