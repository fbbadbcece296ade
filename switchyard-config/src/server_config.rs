use crate::{env, ConfigError, FromEnv, Validate};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Settings for serving a router over HTTP.
///
/// | field | variable | default |
/// |---|---|---|
/// | `host` | `HOST` | `127.0.0.1` |
/// | `port` | `PORT` | `3000` |
/// | `log_level` | `LOG_LEVEL` | `info` |
/// | `log_format` | `LOG_FORMAT` | `pretty` |
/// | `not_found_message` | `NOT_FOUND_MESSAGE` | unset |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
    pub not_found_message: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            not_found_message: None,
        }
    }
}

impl ServerConfig {
    /// `host:port`, ready for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_json_logging(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl FromEnv for ServerConfig {
    fn load_from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: env::with_default("HOST", defaults.host)?,
            port: env::with_default("PORT", defaults.port)?,
            log_level: env::with_default("LOG_LEVEL", defaults.log_level)?,
            log_format: env::with_default("LOG_FORMAT", defaults.log_format)?,
            not_found_message: env::optional("NOT_FOUND_MESSAGE")?,
        })
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let mut failures = Vec::new();

        if self.host.trim().is_empty() {
            failures.push("host must not be empty".to_string());
        }
        if self.port == 0 {
            failures.push("port must be between 1 and 65535".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            failures.push(format!(
                "log_level '{}' is not one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }
        if !LOG_FORMATS.contains(&self.log_format.to_lowercase().as_str()) {
            failures.push(format!(
                "log_format '{}' is not one of {}",
                self.log_format,
                LOG_FORMATS.join(", ")
            ));
        }

        match ConfigError::from_failures(failures) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
