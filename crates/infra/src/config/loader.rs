//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If any `INFERNO_*` variable is set, load from the environment
//! 2. Otherwise probe for a config file (JSON or TOML)
//! 3. Fall back to built-in defaults when no file exists
//! 4. Validate the result
//!
//! ## Environment Variables
//! Every variable is optional; unset variables keep their default.
//! - `INFERNO_FEED_BATCH_SIZE`: Profiles requested per refill
//! - `INFERNO_FEED_LOW_WATERMARK`: Queue length that triggers an auto refill
//! - `INFERNO_FEED_REFILL_LATENCY_MS`: Delay before a refill lands
//! - `INFERNO_FEED_REFILL_RETRY_MS`: Delay before retrying a failed refill
//! - `INFERNO_BOOST_DURATION_SECS`: Boost window length
//! - `INFERNO_BOOST_TICK_INTERVAL_MS`: Boost countdown refresh period
//! - `INFERNO_LOG_LEVEL`: Default tracing filter
//! - `INFERNO_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./inferno.json` or `./inferno.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use inferno_domain::{Config, InfernoError, Result};

use crate::errors::InfraError;

const ENV_BATCH_SIZE: &str = "INFERNO_FEED_BATCH_SIZE";
const ENV_LOW_WATERMARK: &str = "INFERNO_FEED_LOW_WATERMARK";
const ENV_REFILL_LATENCY_MS: &str = "INFERNO_FEED_REFILL_LATENCY_MS";
const ENV_REFILL_RETRY_MS: &str = "INFERNO_FEED_REFILL_RETRY_MS";
const ENV_BOOST_DURATION_SECS: &str = "INFERNO_BOOST_DURATION_SECS";
const ENV_BOOST_TICK_INTERVAL_MS: &str = "INFERNO_BOOST_TICK_INTERVAL_MS";
const ENV_LOG_LEVEL: &str = "INFERNO_LOG_LEVEL";
const ENV_LOG_JSON: &str = "INFERNO_LOG_JSON";

const ENV_KEYS: &[&str] = &[
    ENV_BATCH_SIZE,
    ENV_LOW_WATERMARK,
    ENV_REFILL_LATENCY_MS,
    ENV_REFILL_RETRY_MS,
    ENV_BOOST_DURATION_SECS,
    ENV_BOOST_TICK_INTERVAL_MS,
    ENV_LOG_LEVEL,
    ENV_LOG_JSON,
];

/// Load configuration with automatic fallback strategy
///
/// Environment variables win when any of them is set. Otherwise the first
/// probed config file is used, and defaults apply when there is none.
///
/// # Errors
/// Returns `InfernoError::Config` if:
/// - An environment variable has an invalid value
/// - The config file cannot be read or parsed
/// - The resulting configuration fails validation
pub fn load() -> Result<Config> {
    let config = if env_configured() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        config
    } else if let Some(path) = probe_config_paths() {
        load_from_file(Some(path))?
    } else {
        tracing::info!("No configuration found, using defaults");
        Config::default()
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// Starts from [`Config::default`] and overrides every field whose variable
/// is set.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `InfernoError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    if let Some(batch_size) = env_parse(ENV_BATCH_SIZE)? {
        config.feed.batch_size = batch_size;
    }
    if let Some(low_watermark) = env_parse(ENV_LOW_WATERMARK)? {
        config.feed.low_watermark = low_watermark;
    }
    if let Some(latency) = env_parse(ENV_REFILL_LATENCY_MS)? {
        config.feed.refill_latency_ms = latency;
    }
    if let Some(retry) = env_parse(ENV_REFILL_RETRY_MS)? {
        config.feed.refill_retry_ms = retry;
    }
    if let Some(duration) = env_parse(ENV_BOOST_DURATION_SECS)? {
        config.boost.duration_secs = duration;
    }
    if let Some(tick) = env_parse(ENV_BOOST_TICK_INTERVAL_MS)? {
        config.boost.tick_interval_ms = tick;
    }
    if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `InfernoError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(InfernoError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            InfernoError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(InfraError::from)?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(InfernoError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, and the directory of
/// the running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("inferno.json"),
        dir.join("inferno.toml"),
    ]
}

/// Whether any `INFERNO_*` configuration variable is set
fn env_configured() -> bool {
    ENV_KEYS.iter().any(|key| std::env::var_os(key).is_some())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `InfernoError::Config` if the variable is set but does not parse.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| InfernoError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
