use astra_search::config::{Config, LogFormat};
use astra_search::{invocation_handler, AppState, ResponseEnvelope};

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load configuration once; every invocation reads the same values
    let config = Config::from_env()?;

    init_tracing(config.log_format);
    tracing::info!("Starting Astra search action");

    let start = std::time::Instant::now();
    let state = Arc::new(AppState::new(config)?);
    tracing::info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Cold start complete",
    );

    run(service_fn(move |event: LambdaEvent<Value>| {
        let state = Arc::clone(&state);
        async move {
            let (payload, context) = event.into_parts();
            tracing::debug!(request_id = %context.request_id, "Invocation started");
            Ok::<ResponseEnvelope, Error>(invocation_handler(&state, payload).await)
        }
    }))
    .await
}

/// The platform timestamps every log line, so records are emitted without time.
fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "astra_search=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(false).without_time())
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).without_time())
            .init(),
    }
}
