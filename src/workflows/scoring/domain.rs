use serde::{Deserialize, Serialize};

/// Identifier wrapper for scored interviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterviewId(pub String);

/// Ground-truth transcript entry: one question asked and the answer given.
///
/// The normalizer uses these positionally to backfill question/answer text
/// the model dropped from its response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Validated evaluation of a full interview.
///
/// Instances only exist after the normalizer has repaired and schema-checked
/// the raw model payload, so every field upholds the documented ranges:
/// scores are integers in [0, 100] and the strength lists are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub overall_score: u8,
    pub overall_strengths: Vec<String>,
    pub overall_improvements: Vec<String>,
    pub questions: Vec<QuestionEvaluation>,
}

/// Per-question slice of an [`Evaluation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEvaluation {
    pub question: String,
    pub answer: String,
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Persistence status flag accompanying an evaluation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Complete,
    Failed,
}

impl EvaluationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationStatus::Complete => "complete",
            EvaluationStatus::Failed => "failed",
        }
    }
}
