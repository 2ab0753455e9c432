use std::sync::OnceLock;

use jsonschema::Draft;
use serde_json::Value;

/// Embedded strict schema for evaluation_v1.
///
/// NOTE: CARGO_MANIFEST_DIR keeps the path stable regardless of where the
/// crate is built from.
const EVALUATION_V1_SCHEMA_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/evaluation_v1.schema.json"
));

static VALIDATOR: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

/// One schema violation: where it happened and what the validator said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

fn compiled_validator() -> Result<&'static jsonschema::Validator, SchemaViolation> {
    VALIDATOR
        .get_or_init(|| {
            let schema: Value = serde_json::from_str(EVALUATION_V1_SCHEMA_JSON)
                .map_err(|err| format!("embedded evaluation_v1 schema is not valid JSON: {err}"))?;

            jsonschema::options()
                .with_draft(Draft::Draft202012)
                .build(&schema)
                .map_err(|err| format!("embedded evaluation_v1 schema failed to compile: {err}"))
        })
        .as_ref()
        .map_err(|message| SchemaViolation {
            path: "(schema)".to_string(),
            message: message.clone(),
        })
}

/// Validate a repaired candidate against the strict evaluation_v1 schema.
pub(crate) fn validate(candidate: &Value) -> Result<(), Vec<SchemaViolation>> {
    let validator = match compiled_validator() {
        Ok(validator) => validator,
        Err(violation) => return Err(vec![violation]),
    };

    if validator.is_valid(candidate) {
        return Ok(());
    }

    let violations = validator
        .iter_errors(candidate)
        .map(|err| SchemaViolation {
            path: err.instance_path().to_string(),
            message: err.to_string(),
        })
        .collect();

    Err(violations)
}
