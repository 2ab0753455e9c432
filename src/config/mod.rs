use std::env;
use std::time::Duration;

/// Top-level configuration for the scoring workflow.
///
/// The normalizer itself is configuration-free; these settings only govern the
/// calling collaborator (generation timeout) and telemetry.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub generation_timeout: Duration,
    pub telemetry: TelemetryConfig,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl ScoringConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let timeout_secs = match env::var("SCORING_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw })?,
            Err(_) => 60,
        };

        let log_level = env::var("SCORING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            generation_timeout: Duration::from_secs(timeout_secs),
            telemetry: TelemetryConfig { log_level },
        })
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            generation_timeout: Duration::from_secs(60),
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

/// Configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SCORING_TIMEOUT_SECS '{value}' is not a whole number of seconds")]
    InvalidTimeout { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_matches_upstream_observation() {
        let config = ScoringConfig::default();
        assert_eq!(config.generation_timeout, Duration::from_secs(60));
        assert_eq!(config.telemetry.log_level, "info");
    }
}
