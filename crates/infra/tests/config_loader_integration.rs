//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::path::PathBuf;

use inferno_domain::InfernoError;
use inferno_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let path = write_config(
        r#"{
        "feed": {
            "batch_size": 10,
            "low_watermark": 4,
            "refill_latency_ms": 200,
            "refill_retry_ms": 5000,
            "teardown_timeout_ms": 250
        },
        "boost": {
            "duration_secs": 600,
            "tick_interval_ms": 500
        },
        "logging": {
            "level": "inferno_infra=debug",
            "json": true
        }
    }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("JSON config should load");

    assert_eq!(config.feed.batch_size, 10);
    assert_eq!(config.feed.low_watermark, 4);
    assert_eq!(config.feed.refill_latency_ms, 200);
    assert_eq!(config.feed.refill_retry_ms, 5000);
    assert_eq!(config.feed.teardown_timeout_ms, 250);
    assert_eq!(config.boost.duration_secs, 600);
    assert_eq!(config.boost.tick_interval_ms, 500);
    assert_eq!(config.logging.level, "inferno_infra=debug");
    assert!(config.logging.json);
    assert!(config.validate().is_ok());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let path = write_config(
        r#"
[feed]
batch_size = 6
low_watermark = 2

[boost]
duration_secs = 120
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("TOML config should load");

    assert_eq!(config.feed.batch_size, 6);
    assert_eq!(config.feed.low_watermark, 2);
    assert_eq!(config.feed.refill_latency_ms, 350);
    assert_eq!(config.boost.duration_secs, 120);
    assert_eq!(config.boost.tick_interval_ms, 1000);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_with_minimal_fields() {
    let path = write_config("{}", "json");

    let config = config::load_from_file(Some(path.clone())).expect("Empty object is valid");
    assert_eq!(config, inferno_domain::Config::default());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_nonexistent_file() {
    let result = config::load_from_file(Some(PathBuf::from("/nonexistent/path/inferno.toml")));

    match result {
        Err(InfernoError::Config(msg)) => assert!(msg.contains("not found")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_format() {
    let path = write_config("[feed\nbatch_size = ", "toml");

    let result = config::load_from_file(Some(path.clone()));
    assert!(matches!(result, Err(InfernoError::Config(_))), "Invalid TOML must be rejected");

    std::fs::remove_file(path).ok();
}
