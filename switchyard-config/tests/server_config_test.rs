use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use switchyard_config::{ConfigError, ConfigModule, Environment, ServerConfig};

const VARS: [&str; 6] = [
    "HOST",
    "PORT",
    "LOG_LEVEL",
    "LOG_FORMAT",
    "NOT_FOUND_MESSAGE",
    "APP_ENV",
];

fn clear_env() {
    for key in VARS {
        std::env::remove_var(key);
    }
}

fn write_env_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("switchyard-config-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = ConfigModule::<ServerConfig>::from_env().unwrap();

    assert_eq!(config.get(), ServerConfig::default());
}

#[test]
#[serial]
fn test_reads_environment() {
    clear_env();
    std::env::set_var("HOST", "0.0.0.0");
    std::env::set_var("PORT", "8080");
    std::env::set_var("LOG_LEVEL", "debug");
    std::env::set_var("LOG_FORMAT", "json");
    std::env::set_var("NOT_FOUND_MESSAGE", "nothing here");

    let config = ConfigModule::<ServerConfig>::from_env().unwrap();
    let config = config.get_ref();

    assert_eq!(config.address(), "0.0.0.0:8080");
    assert_eq!(config.log_level, "debug");
    assert!(config.is_json_logging());
    assert_eq!(config.not_found_message.as_deref(), Some("nothing here"));

    clear_env();
}

#[test]
#[serial]
fn test_unparsable_port() {
    clear_env();
    std::env::set_var("PORT", "not-a-port");

    let result = ConfigModule::<ServerConfig>::from_env();

    match result {
        Err(ConfigError::ParseError { key, .. }) => assert_eq!(key, "PORT"),
        other => panic!("expected a parse error, got {other:?}"),
    }

    clear_env();
}

#[test]
#[serial]
fn test_validation_runs_on_load() {
    clear_env();
    std::env::set_var("PORT", "0");

    let result = ConfigModule::<ServerConfig>::from_env();

    assert!(matches!(result, Err(ConfigError::ValidationError(_))));

    clear_env();
}

#[test]
#[serial]
fn test_from_file() {
    clear_env();
    let path = write_env_file("from-file", "PORT=4000\nLOG_LEVEL=warn\n");

    let config = ConfigModule::<ServerConfig>::from_file(&path).unwrap();

    assert_eq!(config.get().port, 4000);
    assert_eq!(config.get().log_level, "warn");

    fs::remove_file(path).unwrap();
    clear_env();
}

#[test]
#[serial]
fn test_environment_wins_over_file() {
    clear_env();
    std::env::set_var("PORT", "5000");
    let path = write_env_file("precedence", "PORT=4000\n");

    let config = ConfigModule::<ServerConfig>::from_file(&path).unwrap();

    assert_eq!(config.get().port, 5000);

    fs::remove_file(path).unwrap();
    clear_env();
}

#[test]
#[serial]
fn test_missing_file() {
    clear_env();

    let result = ConfigModule::<ServerConfig>::from_file("/definitely/not/here/.env");

    assert!(matches!(result, Err(ConfigError::DotenvError(_))));
}

#[test]
#[serial]
fn test_current_environment() {
    clear_env();
    assert_eq!(Environment::current(), Environment::Development);

    std::env::set_var("APP_ENV", "prod");
    assert_eq!(Environment::current(), Environment::Production);

    clear_env();
}
