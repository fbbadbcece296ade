//! # switchyard-config
//!
//! Typed configuration for switchyard servers, loaded from environment
//! variables and `.env` files.
//!
//! ```rust
//! use switchyard_config::{ConfigModule, ServerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! std::env::set_var("PORT", "8080");
//!
//! let config = ConfigModule::<ServerConfig>::from_env()?;
//! assert_eq!(config.get().port, 8080);
//! assert_eq!(config.get().host, "127.0.0.1");
//! # std::env::remove_var("PORT");
//! # Ok(())
//! # }
//! ```
//!
//! Any type implementing [`FromEnv`] and [`Validate`] can be loaded the
//! same way. The helpers in [`env`] do the parsing:
//!
//! ```rust
//! use switchyard_config::{env, ConfigError, FromEnv, Validate};
//!
//! #[derive(Clone)]
//! struct CacheConfig {
//!     ttl_seconds: u64,
//! }
//!
//! impl FromEnv for CacheConfig {
//!     fn load_from_env() -> Result<Self, ConfigError> {
//!         Ok(Self {
//!             ttl_seconds: env::with_default("CACHE_TTL_SECONDS", 60)?,
//!         })
//!     }
//! }
//!
//! impl Validate for CacheConfig {
//!     fn validate(&self) -> Result<(), ConfigError> {
//!         Ok(())
//!     }
//! }
//! ```
//!
//! ## Multi-Environment Support
//!
//! ```rust,ignore
//! use switchyard_config::{ConfigModule, Environment, ServerConfig};
//!
//! // Loads .env.development, .env.production, .env.test or .env.<name>
//! let config = ConfigModule::<ServerConfig>::from_env_file(Environment::current())?;
//! ```

use std::env as std_env;
use std::path::PathBuf;
use std::sync::Arc;

pub mod env;

mod server_config;
pub use server_config::{ServerConfig, LOG_FORMATS, LOG_LEVELS};

/// Loads and validates a configuration once, then hands out copies
#[derive(Debug, Clone)]
pub struct ConfigModule<T: Config> {
    config: Arc<T>,
}

impl<T: Config> ConfigModule<T> {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = T::load_from_env()?;
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Load a .env file, then the environment. Variables already set win.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        dotenv::from_path(path.into())?;
        Self::from_env()
    }

    /// Load with environment-specific file
    /// e.g., .env.development, .env.production
    pub fn from_env_file(env: Environment) -> Result<Self, ConfigError> {
        Self::from_file(env.file_name())
    }

    pub fn get(&self) -> T {
        (*self.config).clone()
    }

    pub fn get_ref(&self) -> &T {
        &self.config
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
    Custom(String),
}

impl Environment {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            "production" | "prod" => Self::Production,
            "test" => Self::Test,
            custom => Self::Custom(custom.to_string()),
        }
    }

    /// Read from `APP_ENV`, development when unset
    pub fn current() -> Self {
        std_env::var("APP_ENV")
            .map(|e| Self::parse(&e))
            .unwrap_or(Self::Development)
    }

    pub fn file_name(&self) -> String {
        match self {
            Environment::Development => ".env.development".to_string(),
            Environment::Production => ".env.production".to_string(),
            Environment::Test => ".env.test".to_string(),
            Environment::Custom(name) => format!(".env.{name}"),
        }
    }
}

/// Trait for configuration validation
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Trait for loading configuration from environment
pub trait FromEnv: Sized {
    fn load_from_env() -> Result<Self, ConfigError>;
}

/// Combined trait for configuration types
///
/// Implemented for any type that implements both `FromEnv` and `Validate`.
pub trait Config: FromEnv + Validate + Clone + Send + Sync + 'static {}

impl<T> Config for T where T: FromEnv + Validate + Clone + Send + Sync + 'static {}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable '{0}' not found")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {message}")]
    ParseError { key: String, message: String },

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Failed to load .env file: {0}")]
    DotenvError(#[from] dotenv::Error),

    #[error("Multiple validation errors: {0:?}")]
    MultipleErrors(Vec<String>),
}

impl ConfigError {
    /// One error for a single failure, [`ConfigError::MultipleErrors`] otherwise
    pub fn from_failures(mut failures: Vec<String>) -> Option<Self> {
        match failures.len() {
            0 => None,
            1 => failures.pop().map(ConfigError::ValidationError),
            _ => Some(ConfigError::MultipleErrors(failures)),
        }
    }
}
