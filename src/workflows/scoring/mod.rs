//! Interview scoring workflow: prompt rendering, payload extraction, the
//! evaluation normalizer, and the service that wires them to the generation
//! and storage seams.

pub mod domain;
pub mod extract;
pub mod normalizer;
pub mod prompt;
pub mod repository;
mod service;

pub use extract::ExtractError;
pub use normalizer::{normalize, NormalizeError, SchemaViolation};
pub use service::{GenerationError, ScoreGenerator, ScoringError, ScoringService};
