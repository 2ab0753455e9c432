use serde_json::Value;

pub(super) const QUESTION_STRENGTH_PLACEHOLDER: &str = "Provided a response to the question";
pub(super) const OVERALL_STRENGTH_PLACEHOLDER: &str = "Completed the interview";
pub(super) const OVERALL_IMPROVEMENT_PLACEHOLDER: &str =
    "Keep practicing to add depth across topics";

pub(super) const MAX_QUESTION_FEEDBACK: usize = 3;
pub(super) const MAX_OVERALL_FEEDBACK: usize = 5;

/// Coerce an arbitrary score value into an integer in [0, 100].
///
/// Plain numbers are rounded. Objects contribute their `total` field when it
/// is numeric, otherwise the sum of all numeric sub-fields (a breakdown like
/// `{"accuracy": 30, "depth": 20}` becomes 50). Anything else degrades to 0
/// rather than failing the evaluation.
pub(super) fn coerce_score(value: Option<&Value>) -> u8 {
    match value {
        Some(Value::Number(number)) => number.as_f64().map(clamp_round).unwrap_or(0),
        Some(Value::Object(breakdown)) => {
            if let Some(total) = breakdown.get("total").and_then(Value::as_f64) {
                tracing::debug!(total, "score object carried an explicit total");
                return clamp_round(total);
            }

            let sum: f64 = breakdown.values().filter_map(Value::as_f64).sum();
            if breakdown.values().any(|field| field.as_f64().is_some()) {
                tracing::debug!(sum, "summed numeric sub-fields of score object");
                clamp_round(sum)
            } else {
                tracing::debug!("score object had no numeric sub-fields, defaulting to 0");
                0
            }
        }
        _ => {
            tracing::debug!("score missing or non-numeric, defaulting to 0");
            0
        }
    }
}

fn clamp_round(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Coerce a feedback field into a bounded list of non-empty strings.
///
/// Non-array or absent values collapse to an empty list; non-string and
/// blank entries are dropped; the result is truncated to `cap` so it can
/// never overflow the strict schema's maxItems.
pub(super) fn string_list(value: Option<&Value>, cap: usize) -> Vec<String> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .take(cap)
        .collect()
}

/// Deduplicated, order-preserving union of per-item feedback lists, capped
/// and padded with a placeholder when the union is empty.
pub(super) fn synthesize_feedback<'a, I>(per_item: I, cap: usize, placeholder: &str) -> Vec<String>
where
    I: Iterator<Item = &'a [String]>,
{
    let mut union: Vec<String> = Vec::new();
    for list in per_item {
        for entry in list {
            if union.len() == cap {
                break;
            }
            if !union.iter().any(|seen| seen == entry) {
                union.push(entry.clone());
            }
        }
    }

    if union.is_empty() {
        union.push(placeholder.to_string());
    }

    union
}
