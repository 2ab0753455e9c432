use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Evaluation, EvaluationStatus, InterviewId};

/// Stored verdict for one scored interview.
///
/// A `Failed` record carries the terminal error message instead of an
/// evaluation so the upstream product can show "try again" and a retry can be
/// decided outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub interview_id: InterviewId,
    pub status: EvaluationStatus,
    pub evaluation: Option<Evaluation>,
    pub error: Option<String>,
    pub scored_at: DateTime<Utc>,
}

impl EvaluationRecord {
    pub fn complete(interview_id: InterviewId, evaluation: Evaluation) -> Self {
        Self {
            interview_id,
            status: EvaluationStatus::Complete,
            evaluation: Some(evaluation),
            error: None,
            scored_at: Utc::now(),
        }
    }

    pub fn failed(interview_id: InterviewId, error: String) -> Self {
        Self {
            interview_id,
            status: EvaluationStatus::Failed,
            evaluation: None,
            error: Some(error),
            scored_at: Utc::now(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait EvaluationRepository: Send + Sync {
    fn save(&self, record: EvaluationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &InterviewId) -> Result<Option<EvaluationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
