use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::domain::{Evaluation, InterviewId, QaPair};
use super::extract::{extract_json, ExtractError};
use super::normalizer::{normalize, NormalizeError};
use super::prompt::scoring_prompt;
use super::repository::{EvaluationRecord, EvaluationRepository, RepositoryError};
use crate::config::ScoringConfig;

/// Seam over the upstream text-generation call.
///
/// Implementations wrap whatever provider produces the evaluation text; the
/// service only sees the raw reply and owns the timeout around it.
pub trait ScoreGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// Upstream generation failures.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation provider is not configured")]
    Unconfigured,
    #[error("generation provider unavailable: {0}")]
    Provider(String),
}

/// Terminal failure of one scoring attempt.
///
/// Retry policy lives with whoever calls [`ScoringService::score`]; the
/// variants distinguish "the provider never answered" from "the answer could
/// not be repaired" so that decision is an informed one.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("transcript contains no question/answer pairs")]
    EmptyTranscript,
    #[error("generation call timed out after {0:?}")]
    Timeout(Duration),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Service composing the prompt, the generation seam, the normalizer, and
/// the storage seam into one scoring call per interview.
pub struct ScoringService<G, R> {
    generator: Arc<G>,
    repository: Arc<R>,
    generation_timeout: Duration,
}

impl<G, R> ScoringService<G, R>
where
    G: ScoreGenerator + 'static,
    R: EvaluationRepository + 'static,
{
    pub fn new(generator: Arc<G>, repository: Arc<R>, config: &ScoringConfig) -> Self {
        Self {
            generator,
            repository,
            generation_timeout: config.generation_timeout,
        }
    }

    /// Score one completed interview and persist the verdict.
    ///
    /// Exactly one generation attempt is made. Success stores a `complete`
    /// record; any failure stores a `failed` record carrying the error
    /// message and then surfaces the error to the caller.
    pub async fn score(
        &self,
        interview_id: InterviewId,
        transcript: &[QaPair],
    ) -> Result<Evaluation, ScoringError> {
        info!(interview = %interview_id.0, questions = transcript.len(), "scoring interview");

        match self.evaluate(transcript).await {
            Ok(evaluation) => {
                self.repository
                    .save(EvaluationRecord::complete(interview_id, evaluation.clone()))?;
                Ok(evaluation)
            }
            Err(err) => {
                let failure = EvaluationRecord::failed(interview_id.clone(), err.to_string());
                if let Err(save_err) = self.repository.save(failure) {
                    warn!(
                        interview = %interview_id.0,
                        error = %save_err,
                        "could not persist failed evaluation record"
                    );
                }
                Err(err)
            }
        }
    }

    async fn evaluate(&self, transcript: &[QaPair]) -> Result<Evaluation, ScoringError> {
        if transcript.is_empty() {
            return Err(ScoringError::EmptyTranscript);
        }

        let prompt = scoring_prompt(transcript);
        let reply = tokio::time::timeout(self.generation_timeout, self.generator.generate(&prompt))
            .await
            .map_err(|_| ScoringError::Timeout(self.generation_timeout))??;

        let raw = extract_json(&reply)?;
        let evaluation = normalize(&raw, transcript)?;

        if evaluation.questions.len() != transcript.len() {
            warn!(
                expected = transcript.len(),
                scored = evaluation.questions.len(),
                "model scored a different number of questions than asked"
            );
        }

        Ok(evaluation)
    }
}
