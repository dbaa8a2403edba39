use crate::astra::AstraClient;
use crate::config::Config;

/// Process-wide state shared by every invocation.
/// Read-only after construction; invocations never mutate it.
pub struct AppState {
    pub client: AstraClient,
}

impl AppState {
    /// Initialize application state at cold start.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = AstraClient::new(&config)?;

        tracing::info!(
            url = %client.url(),
            keyspace = %config.keyspace,
            collection = %config.collection,
            token_configured = config.astra_token.is_some(),
            timeout_secs = config.request_timeout.map(|t| t.as_secs()),
            "State initialized"
        );

        Ok(Self { client })
    }
}
