//! Configuration for a visualizer instance.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::result::Result;

/// Environment variable overriding the pacing delay, in milliseconds.
pub const ENV_STEP_DELAY_MS: &str = "ALGOVIZ_STEP_DELAY_MS";
/// Environment variable selecting the trace level (`visits` or `detailed`).
pub const ENV_TRACE_LEVEL: &str = "ALGOVIZ_TRACE_LEVEL";
/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "ALGOVIZ_LOG";

/// Configuration shared by the traversal algorithms and the step engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Minimum delay between two step deliveries.
    #[serde(with = "duration_millis", default = "default_step_delay")]
    pub step_delay: Duration,

    /// How much detail the traversal algorithms emit.
    #[serde(default)]
    pub trace_level: TraceLevel,

    /// Log filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            step_delay: default_step_delay(),
            trace_level: TraceLevel::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl VisualizerConfig {
    /// Set the pacing delay.
    #[must_use]
    pub const fn step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Set the trace level.
    #[must_use]
    pub const fn trace_level(mut self, level: TraceLevel) -> Self {
        self.trace_level = level;
        self
    }

    /// Set the log filter.
    #[must_use]
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_STEP_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(delay) => config.step_delay = Duration::from_millis(delay),
                Err(e) => {
                    debug!(var = ENV_STEP_DELAY_MS, value = %raw, error = %e, "Ignoring step delay");
                }
            }
        }

        if let Some(raw) = lookup(ENV_TRACE_LEVEL) {
            match raw.parse::<TraceLevel>() {
                Ok(level) => config.trace_level = level,
                Err(e) => debug!(var = ENV_TRACE_LEVEL, error = %e, "Ignoring trace level"),
            }
        }

        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }

        config
    }

    /// Load configuration from a file.
    ///
    /// Files with a `.json` extension are parsed as JSON, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigReadFailed` if the file cannot be read and
    /// `Error::ConfigParseFailed` if its contents do not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read_failed(path, e.to_string()))?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::config_parse_failed(format!("Failed to parse config: {e}")))
        } else {
            toml::from_str(&content)
                .map_err(|e| Error::config_parse_failed(format!("Failed to parse config: {e}")))
        }
    }
}

/// Amount of detail emitted by the traversal algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    /// Only the visit and compare steps of each algorithm.
    #[default]
    Visits,
    /// Additionally emit backtrack steps where the algorithm has them.
    Detailed,
}

impl std::fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visits => write!(f, "visits"),
            Self::Detailed => write!(f, "detailed"),
        }
    }
}

impl FromStr for TraceLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "visits" => Ok(Self::Visits),
            "detailed" => Ok(Self::Detailed),
            other => Err(Error::validation(format!(
                "unknown trace level '{other}', expected 'visits' or 'detailed'"
            ))),
        }
    }
}

const fn default_step_delay() -> Duration {
    Duration::from_millis(500)
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Serialization helper for Duration as milliseconds.
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        u64::try_from(duration.as_millis())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
