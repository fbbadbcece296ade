//! Logging setup for servers.

use switchyard_config::ServerConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ServeError;

/// Filter directives for `config`. `RUST_LOG` takes precedence when set.
pub fn env_filter(config: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()))
}

/// Install the global subscriber: pretty or JSON lines depending on
/// `config.log_format`. Fails if a subscriber is already installed.
pub fn init_tracing(config: &ServerConfig) -> Result<(), ServeError> {
    let json = config.is_json_logging();

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with((!json).then(fmt::layer))
        .with(json.then(|| fmt::layer().json()))
        .try_init()
        .map_err(|e| ServeError::Telemetry(e.to_string()))
}
