use serde_json::Value;

/// Failure to locate or parse a JSON object inside a model reply.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("model reply contains no JSON object")]
    NoJsonObject,
    #[error("model reply contains malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pull the evaluation payload out of a raw model reply.
///
/// Generation models routinely wrap the requested JSON in markdown fences or
/// surround it with prose. Strategies are tried in order: a fenced code
/// block, the first balanced `{...}` object in the text, then the whole
/// trimmed reply. The first strategy that yields a candidate wins; its parse
/// failure is reported rather than falling through to a weaker strategy.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    if let Some(block) = fenced_block(text) {
        return Ok(serde_json::from_str(block)?);
    }

    if let Some(object) = balanced_object(text) {
        return Ok(serde_json::from_str(object)?);
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::NoJsonObject);
    }

    Ok(serde_json::from_str(trimmed)?)
}

/// Content of the first markdown code fence, if it looks like an object.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    let body_start = after_fence.find('\n')?;
    let body = &after_fence[body_start + 1..];
    let end = body.find("```")?;
    let inner = body[..end].trim();
    inner.starts_with('{').then_some(inner)
}

/// First balanced `{...}` span, honoring string literals and escapes.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_json() {
        let value = extract_json(r#"{"overall_score": 80}"#).expect("parse");
        assert_eq!(value, json!({"overall_score": 80}));
    }

    #[test]
    fn unwraps_json_fence() {
        let reply = "Here is the evaluation:\n```json\n{\"overall_score\": 75}\n```\nThanks!";
        let value = extract_json(reply).expect("parse");
        assert_eq!(value, json!({"overall_score": 75}));
    }

    #[test]
    fn unwraps_untagged_fence() {
        let reply = "```\n{\"questions\": []}\n```";
        let value = extract_json(reply).expect("parse");
        assert_eq!(value, json!({"questions": []}));
    }

    #[test]
    fn finds_embedded_object_in_prose() {
        let reply = "Sure! {\"questions\": [{\"score\": 9}]} Let me know if you need more.";
        let value = extract_json(reply).expect("parse");
        assert_eq!(value, json!({"questions": [{"score": 9}]}));
    }

    #[test]
    fn braces_inside_strings_do_not_break_the_scan() {
        let reply = r#"Result: {"questions": [{"answer": "use {} braces", "score": 5}]}"#;
        let value = extract_json(reply).expect("parse");
        assert_eq!(
            value,
            json!({"questions": [{"answer": "use {} braces", "score": 5}]})
        );
    }

    #[test]
    fn plain_prose_is_rejected() {
        assert!(matches!(
            extract_json("no structured data here"),
            Err(ExtractError::Parse(_))
        ));
        assert!(matches!(extract_json("   "), Err(ExtractError::NoJsonObject)));
    }

    #[test]
    fn malformed_fence_content_is_a_parse_error() {
        let reply = "```json\n{\"overall_score\": \n```";
        assert!(matches!(extract_json(reply), Err(ExtractError::Parse(_))));
    }
}
