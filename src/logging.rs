//! # Structured Logging Module
//!
//! Environment-aware structured logging for debugging query composition and
//! engine round trips.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
///
/// Safe to call more than once; the subscriber is installed at most once
/// and an already-installed global subscriber is tolerated.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(EnvFilter::new(log_level)),
        );

        // Use try_init to avoid a panic if a global subscriber already exists
        // (e.g. set by the embedding application).
        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }

        tracing::info!(environment = %environment, "structured logging initialized");
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    environment_from(
        std::env::var("CONTENT_STORE_ENV").ok(),
        std::env::var("APP_ENV").ok(),
    )
}

fn environment_from(primary: Option<String>, fallback: Option<String>) -> String {
    primary
        .or(fallback)
        .unwrap_or_else(|| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_detection() {
        assert_eq!(
            environment_from(Some("staging".to_string()), Some("ignored".to_string())),
            "staging"
        );
        assert_eq!(
            environment_from(None, Some("production".to_string())),
            "production"
        );
        assert_eq!(environment_from(None, None), "development");
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(get_log_level("test"), "debug");
        assert_eq!(get_log_level("development"), "debug");
        assert_eq!(get_log_level("production"), "info");
        assert_eq!(get_log_level("unknown"), "debug");
    }
}
