//! Application Configuration
//! Environment-driven settings with a command line override for the data source.

use crate::stats::TopN;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATA_SOURCE: &str = "public/data";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILTER: &str = "ipl_insights=info";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("IPL_DEFAULT_TOP_N must be one of 10, 15, 20 or 25, got {0}")]
    UnsupportedTopN(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL or directory holding the dataset files.
    pub data_source: String,
    pub fetch_timeout: Duration,
    pub default_top_n: TopN,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_top_n: TopN::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_source = lookup("IPL_DATA_SOURCE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());

        let timeout_secs = lookup("IPL_FETCH_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let default_top_n = match lookup("IPL_DEFAULT_TOP_N") {
            None => TopN::default(),
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(TopN::from_count)
                .ok_or(ConfigError::UnsupportedTopN(raw))?,
        };

        Ok(Self {
            data_source,
            fetch_timeout: Duration::from_secs(timeout_secs),
            default_top_n,
        })
    }

    /// Replace the data source with the first command line argument, if any.
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(source) = args.next().filter(|a| !a.trim().is_empty()) {
            self.data_source = source;
        }
        self
    }
}
