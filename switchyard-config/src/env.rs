//! Typed reads of single environment variables.

use std::env::{self, VarError};
use std::fmt::Display;
use std::str::FromStr;

use crate::ConfigError;

/// `None` when the variable is unset
pub fn optional<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse(key, &raw).map(Some),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::ParseError {
            key: key.to_string(),
            message: "value is not valid unicode".to_string(),
        }),
    }
}

pub fn required<T>(key: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    optional(key)?.ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

pub fn with_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    Ok(optional(key)?.unwrap_or(default))
}

fn parse<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
        key: key.to_string(),
        message: e.to_string(),
    })
}
