//! Tracing subscriber setup
//!
//! Installs a global `tracing-subscriber` fmt subscriber. `RUST_LOG` takes
//! precedence over the configured level so a single module can be turned up
//! without editing config.

use inferno_domain::LoggingConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which is the
/// normal case for a second call or when a test harness owns logging.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let (filter, level_error) = build_filter(config);

    let installed = if config.json {
        fmt().with_env_filter(filter).json().with_current_span(false).try_init()
    } else {
        fmt().with_env_filter(filter).with_target(true).try_init()
    };

    match installed {
        Ok(()) => {
            if let Some(err) = level_error {
                tracing::warn!(
                    level = %config.level,
                    error = %err,
                    "invalid log level; falling back to info"
                );
            }
            tracing::debug!(level = %config.level, json = config.json, "tracing initialised");
            true
        }
        Err(_) => false,
    }
}

/// Filter from `RUST_LOG`, else the configured level, else `info`. The parse
/// error is handed back so it can be logged once a subscriber exists.
fn build_filter(config: &LoggingConfig) -> (EnvFilter, Option<ParseError>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }

    match EnvFilter::try_new(&config.level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    }
}
