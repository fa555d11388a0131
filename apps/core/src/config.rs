//! Runtime configuration for the triage brain.
//!
//! Defaults reproduce the built-in scoring constants. A hosting process can
//! override them through environment variables (optionally from a `.env` file).

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

/// Minimum combined score a knowledge entry needs to be returned.
pub const DEFAULT_MIN_SCORE: f32 = 0.15;
/// Multiplier applied to the tag similarity.
pub const DEFAULT_TAG_WEIGHT: f32 = 2.0;
/// Default number of knowledge hits.
pub const DEFAULT_RESULT_LIMIT: usize = 3;
/// Distinct concerns a session must accumulate before an assessment is offered.
pub const DEFAULT_CONCERN_THRESHOLD: usize = 2;

/// Knowledge retrieval tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Hits must score strictly above this value.
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_score: f32,
    /// Weight of the tag similarity relative to the content similarity.
    #[validate(range(min = 0.0, max = 10.0))]
    pub tag_weight: f32,
    /// Result count used when the caller does not pass a limit.
    #[validate(range(min = 1, max = 20))]
    pub default_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            tag_weight: DEFAULT_TAG_WEIGHT,
            default_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// Conversation flow tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConversationConfig {
    #[validate(range(min = 1))]
    pub concern_threshold: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            concern_threshold: DEFAULT_CONCERN_THRESHOLD,
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Logging setup consumed by [`crate::telemetry::init_tracing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `triage_core=debug`.
    #[validate(length(min = 1))]
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Complete configuration of the triage brain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub retrieval: RetrievalConfig,
    pub conversation: ConversationConfig,
    pub log: LogConfig,
}

impl TriageConfig {
    /// Builds the configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Some(v) = read_var::<f32>("TRIAGE_MIN_SCORE")? {
            config.retrieval.min_score = v;
        }
        if let Some(v) = read_var::<f32>("TRIAGE_TAG_WEIGHT")? {
            config.retrieval.tag_weight = v;
        }
        if let Some(v) = read_var::<usize>("TRIAGE_RESULT_LIMIT")? {
            config.retrieval.default_limit = v;
        }
        if let Some(v) = read_var::<usize>("TRIAGE_CONCERN_THRESHOLD")? {
            config.conversation.concern_threshold = v;
        }
        if let Ok(filter) = env::var("TRIAGE_LOG_FILTER") {
            config.log.filter = filter;
        }
        if let Some(format) = read_var::<LogFormat>("TRIAGE_LOG_FORMAT")? {
            config.log.format = format;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), AppError> {
        self.retrieval
            .validate()
            .map_err(|e| AppError::Config(format!("retrieval: {}", e)))?;
        self.conversation
            .validate()
            .map_err(|e| AppError::Config(format!("conversation: {}", e)))?;
        self.log
            .validate()
            .map_err(|e| AppError::Config(format!("log: {}", e)))?;
        Ok(())
    }
}

fn read_var<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TriageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.retrieval.min_score, 0.15);
        assert_eq!(config.retrieval.tag_weight, 2.0);
        assert_eq!(config.retrieval.default_limit, 3);
        assert_eq!(config.conversation.concern_threshold, 2);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut config = TriageConfig::default();
        config.retrieval.min_score = 1.5;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = TriageConfig::default();
        config.conversation.concern_threshold = 0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" bunyan ".parse::<LogFormat>().unwrap(), LogFormat::Bunyan);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TriageConfig =
            serde_json::from_str(r#"{"retrieval": {"min_score": 0.3}}"#).unwrap();
        assert_eq!(config.retrieval.min_score, 0.3);
        assert_eq!(config.retrieval.default_limit, 3);
        assert_eq!(config.log.format, LogFormat::Pretty);
    }
}
