//! Repair pipeline turning an untrusted model payload into a strict
//! [`Evaluation`].
//!
//! The upstream generation call is asked for a precise JSON shape but cannot
//! be trusted to produce it: scores arrive as floats, breakdown objects, or
//! not at all; the per-item array hides behind an `evaluations` alias;
//! aggregate fields go missing. Each stage here is idempotent and skipped
//! when its precondition does not hold, so an already-valid evaluation passes
//! through unchanged. After repair the candidate must still clear the strict
//! schema; nothing is trusted on the way out.

mod repair;
mod schema;

pub use schema::SchemaViolation;

use serde_json::{Map, Value};

use super::domain::{Evaluation, QaPair, QuestionEvaluation};
use repair::{
    coerce_score, string_list, synthesize_feedback, MAX_OVERALL_FEEDBACK, MAX_QUESTION_FEEDBACK,
    OVERALL_IMPROVEMENT_PLACEHOLDER, OVERALL_STRENGTH_PLACEHOLDER, QUESTION_STRENGTH_PLACEHOLDER,
};

/// Terminal failures of a single normalization call.
///
/// Neither variant is retried here; the caller owns retry policy for the
/// upstream generation call that produced the payload.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("could not produce any evaluation: {reason}")]
    EmptyPayload { reason: &'static str },
    #[error("repaired evaluation failed strict validation: {}", format_violations(violations))]
    Schema { violations: Vec<SchemaViolation> },
}

fn format_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Normalize a raw model payload against the transcript that was scored.
///
/// `original_questions` is the ground truth used to backfill question/answer
/// text the model dropped; entries are matched positionally. The per-item
/// array drives the output: slots are never dropped, but missing trailing
/// questions are not synthesized either (a shorter array yields a shorter
/// evaluation, and the caller decides what a partial result means).
pub fn normalize(
    raw: &Value,
    original_questions: &[QaPair],
) -> Result<Evaluation, NormalizeError> {
    let payload = raw.as_object().ok_or(NormalizeError::EmptyPayload {
        reason: "payload is not a JSON object",
    })?;

    let items = per_item_array(payload)?;

    let questions: Vec<QuestionEvaluation> = items
        .iter()
        .enumerate()
        .map(|(index, item)| repair_item(index, item, original_questions))
        .collect();

    let overall_strengths = match string_list(
        field(payload, "overall_strengths", "overallStrengths"),
        MAX_OVERALL_FEEDBACK,
    ) {
        list if list.is_empty() => {
            tracing::debug!("synthesizing overall strengths from per-item feedback");
            synthesize_feedback(
                questions.iter().map(|question| question.strengths.as_slice()),
                MAX_OVERALL_FEEDBACK,
                OVERALL_STRENGTH_PLACEHOLDER,
            )
        }
        list => list,
    };

    let overall_improvements = match string_list(
        field(payload, "overall_improvements", "overallImprovements"),
        MAX_OVERALL_FEEDBACK,
    ) {
        list if list.is_empty() => {
            tracing::debug!("synthesizing overall improvements from per-item feedback");
            synthesize_feedback(
                questions
                    .iter()
                    .map(|question| question.improvements.as_slice()),
                MAX_OVERALL_FEEDBACK,
                OVERALL_IMPROVEMENT_PLACEHOLDER,
            )
        }
        list => list,
    };

    let overall_score = coerce_score(field(payload, "overall_score", "overallScore"));

    let evaluation = Evaluation {
        overall_score,
        overall_strengths,
        overall_improvements,
        questions,
    };

    let candidate =
        serde_json::to_value(&evaluation).map_err(|err| NormalizeError::Schema {
            violations: vec![SchemaViolation {
                path: "(serialization)".to_string(),
                message: err.to_string(),
            }],
        })?;

    schema::validate(&candidate).map_err(|violations| NormalizeError::Schema { violations })?;

    Ok(evaluation)
}

/// Key-shape detection: `questions` wins, `evaluations` is the known alias.
fn per_item_array(payload: &Map<String, Value>) -> Result<&Vec<Value>, NormalizeError> {
    let items = match payload.get("questions").and_then(Value::as_array) {
        Some(items) => items,
        None => match payload.get("evaluations").and_then(Value::as_array) {
            Some(items) => {
                tracing::debug!("payload used the 'evaluations' alias for its per-item array");
                items
            }
            None => {
                return Err(NormalizeError::EmptyPayload {
                    reason: "no questions or evaluations array present",
                })
            }
        },
    };

    if items.is_empty() {
        return Err(NormalizeError::EmptyPayload {
            reason: "per-item array contains no entries",
        });
    }

    Ok(items)
}

fn repair_item(index: usize, item: &Value, original_questions: &[QaPair]) -> QuestionEvaluation {
    let empty = Map::new();
    let entry = item.as_object().unwrap_or(&empty);
    let original = original_questions.get(index);

    let question = non_empty_string(entry.get("question"))
        .or_else(|| {
            original
                .map(|qa| qa.question.clone())
                .filter(|text| !text.is_empty())
        })
        .unwrap_or_else(|| {
            tracing::debug!(index, "no question text available, using placeholder");
            format!("Question {}", index + 1)
        });

    let answer = non_empty_string(entry.get("answer"))
        .or_else(|| original.map(|qa| qa.answer.clone()))
        .unwrap_or_default();

    let score = coerce_score(entry.get("score"));

    let mut strengths = string_list(entry.get("strengths"), MAX_QUESTION_FEEDBACK);
    if strengths.is_empty() {
        tracing::debug!(index, "question had no usable strengths, using placeholder");
        strengths.push(QUESTION_STRENGTH_PLACEHOLDER.to_string());
    }

    let improvements = string_list(entry.get("improvements"), MAX_QUESTION_FEEDBACK);

    QuestionEvaluation {
        question,
        answer,
        score,
        strengths,
        improvements,
    }
}

fn field<'a>(payload: &'a Map<String, Value>, snake: &str, camel: &str) -> Option<&'a Value> {
    payload.get(snake).or_else(|| payload.get(camel))
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
