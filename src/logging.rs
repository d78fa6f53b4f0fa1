//! Tracing subscriber setup

use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::LoggingConfig,
    error::{AppError, AppResult},
};

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// `format = "json"` emits one JSON object per event; anything else uses the
/// human readable formatter.
pub fn init(config: &LoggingConfig) -> AppResult<()> {
    subscriber(config)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to install tracing subscriber: {}", e)))
}

fn subscriber(config: &LoggingConfig) -> impl Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookshelf_core={}", config.level).into());
    let json = config.format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
}
