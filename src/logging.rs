//! Tracing subscriber setup.
//!
//! The function host captures stdout and stamps every line, so output is
//! written without ANSI colours or timestamps. `RUST_LOG` directives take
//! precedence over `LOG_LEVEL`.

use crate::core::{PipelineError, Result};
use std::env;
use std::str::FromStr;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Text,
    #[default]
    Json,
}

impl FromStr for LogFormat {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(PipelineError::Config(format!("Invalid log format: {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("LOG_LEVEL") {
            config.level = level.to_lowercase();
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            config.format = format.parse()?;
        }

        Ok(config)
    }
}

pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| PipelineError::Config(format!("Invalid log level {}: {e}", config.level)))?;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time();

    let result = match config.format {
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init(),
        LogFormat::Text => builder.with_target(false).try_init(),
    };

    result.map_err(|e| PipelineError::Config(format!("Failed to install subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_json_info() {
        let config = LogConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_from_lookup() {
        let config = LogConfig::from_lookup(|name| match name {
            "LOG_LEVEL" => Some("DEBUG".to_string()),
            "LOG_FORMAT" => Some("text".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Text);
    }

    #[test]
    fn test_invalid_format() {
        let err = LogConfig::from_lookup(|name| (name == "LOG_FORMAT").then(|| "xml".to_string()))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }
}
