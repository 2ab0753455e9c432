//! End-to-end checks of the evaluation normalizer against the documented
//! repair scenarios: clamping, alias detection, aggregate synthesis, and the
//! terminal empty-payload cases.

use interview_ai::workflows::scoring::domain::QaPair;
use interview_ai::workflows::scoring::{normalize, NormalizeError};
use serde_json::json;

fn transcript() -> Vec<QaPair> {
    vec![
        QaPair {
            question: "Tell me about yourself".to_string(),
            answer: "I have five years of backend experience.".to_string(),
        },
        QaPair {
            question: "How do you approach debugging?".to_string(),
            answer: "Reproduce first, then bisect.".to_string(),
        },
        QaPair {
            question: "Describe a system you designed".to_string(),
            answer: "An event-driven ingestion pipeline.".to_string(),
        },
    ]
}

#[test]
fn well_formed_payload_with_out_of_range_values_is_repaired() {
    let raw = json!({
        "overall_score": 93.7,
        "overall_strengths": ["clear"],
        "overall_improvements": ["depth"],
        "questions": [{
            "question": "Q1",
            "answer": "A1",
            "score": 101,
            "strengths": [],
            "improvements": ["x"]
        }]
    });

    let evaluation = normalize(&raw, &transcript()).expect("normalizes");
    assert_eq!(evaluation.overall_score, 94);
    assert_eq!(evaluation.overall_strengths, vec!["clear"]);
    assert_eq!(evaluation.overall_improvements, vec!["depth"]);
    assert_eq!(evaluation.questions.len(), 1);
    assert_eq!(evaluation.questions[0].score, 100);
    assert_eq!(
        evaluation.questions[0].strengths,
        vec!["Provided a response to the question"]
    );
}

#[test]
fn aliased_minimal_payload_is_fully_synthesized() {
    let raw = json!({
        "evaluations": [{
            "score": {"total": 72.4},
            "strengths": ["good"],
            "improvements": []
        }]
    });

    let evaluation = normalize(&raw, &transcript()).expect("normalizes");
    assert_eq!(evaluation.questions[0].question, "Tell me about yourself");
    assert_eq!(evaluation.questions[0].score, 72);
    assert_eq!(evaluation.overall_strengths, vec!["good"]);
    assert_eq!(evaluation.overall_improvements.len(), 1);
    assert!(!evaluation.overall_improvements[0].is_empty());
}

#[test]
fn unusable_payloads_raise_empty_payload() {
    for raw in [json!({}), json!(null), json!("just text"), json!(17)] {
        match normalize(&raw, &transcript()) {
            Err(NormalizeError::EmptyPayload { .. }) => {}
            other => panic!("expected EmptyPayload, got {other:?}"),
        }
    }
}

#[test]
fn breakdown_score_objects_are_summed() {
    let raw = json!({
        "questions": [{
            "score": {"accuracy": 30, "depth": 20},
            "strengths": ["ok"],
            "improvements": ["ok"]
        }]
    });

    let evaluation = normalize(&raw, &transcript()).expect("normalizes");
    assert_eq!(evaluation.questions[0].score, 50);
}

#[test]
fn partial_per_item_arrays_are_not_padded() {
    let raw = json!({
        "questions": [
            {"score": 40, "strengths": ["one"]},
            {"score": 60, "strengths": ["two"]}
        ]
    });

    let evaluation = normalize(&raw, &transcript()).expect("normalizes");
    assert_eq!(evaluation.questions.len(), 2);
    assert_eq!(evaluation.questions[0].question, "Tell me about yourself");
    assert_eq!(evaluation.questions[1].question, "How do you approach debugging?");
}

#[test]
fn synthesized_aggregates_union_per_item_feedback_capped_at_five() {
    let raw = json!({
        "questions": [
            {"score": 50, "strengths": ["a", "b", "c"], "improvements": []},
            {"score": 50, "strengths": ["c", "d", "e"], "improvements": []},
            {"score": 50, "strengths": ["f", "g"], "improvements": []}
        ]
    });

    let evaluation = normalize(&raw, &transcript()).expect("normalizes");
    assert_eq!(evaluation.overall_strengths, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn output_uses_the_camel_case_wire_shape() {
    let raw = json!({"questions": [{"score": 55, "strengths": ["fine"]}]});
    let evaluation = normalize(&raw, &transcript()).expect("normalizes");
    let rendered = serde_json::to_value(&evaluation).expect("serializes");
    assert!(rendered.get("overallScore").is_some());
    assert!(rendered.get("overall_score").is_none());
}
