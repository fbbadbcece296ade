use std::io;

use switchyard_config::ConfigError;

/// Failures while bringing a server up or running it
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to install the tracing subscriber: {0}")]
    Telemetry(String),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("axum server encountered an error: {0}")]
    Server(#[source] io::Error),
}
