//! Interview-practice scoring library.
//!
//! The centerpiece is the evaluation normalizer in
//! [`workflows::scoring::normalizer`]: it takes the loosely-structured JSON a
//! text-generation model returns for a scored interview and coerces it into a
//! strict, schema-validated [`workflows::scoring::domain::Evaluation`].
//! Everything around it (prompt rendering, JSON extraction, the scoring
//! service, storage seams) exists to exercise that boundary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use error::AppError;
