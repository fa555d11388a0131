//! Tracing subscriber setup for hosting processes.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the host, which can call [`init_tracing`] once at startup.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::{LogConfig, LogFormat};
use crate::error::AppError;

const SERVICE_NAME: &str = "triage-core";

/// Builds the `EnvFilter`, preferring `RUST_LOG` over the configured directive.
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter, AppError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| AppError::Config(format!("Invalid log filter '{}': {}", config.filter, e))),
    }
}

/// Installs the global tracing subscriber.
///
/// Fails with [`AppError::Config`] if the filter is invalid or a global
/// subscriber is already set.
pub fn init_tracing(config: &LogConfig) -> Result<(), AppError> {
    let filter = build_filter(config)?;
    let registry = Registry::default().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Bunyan => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                SERVICE_NAME.to_string(),
                std::io::stdout,
            ))
            .try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to install tracing subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LogConfig {
            filter: "triage_core=notalevel".to_string(),
            format: LogFormat::Pretty,
        };
        temp_env::with_var_unset("RUST_LOG", || {
            assert!(matches!(build_filter(&config), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_second_init_fails() {
        let config = LogConfig::default();
        // Another test may already have installed a subscriber; either way the
        // second call in this test must fail.
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
