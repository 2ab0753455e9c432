use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::scoring::ScoringError;

/// Top-level error for embedders wiring configuration, telemetry, and the
/// scoring workflow together.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),
}
