//! Collapses the error bodies returned by the auth API into one display string.
//!
//! The API answers failures with a bare string, an object carrying `message`
//! and optional `issues`, or either of those wrapped once in `detail`. Anything
//! else falls back to a generic message; this function never fails.

use serde_json::Value;

pub const GENERIC_FAILURE: &str = "Request failed.";

#[must_use]
pub fn normalize(payload: Option<&Value>) -> String {
    let Some(payload) = payload.filter(|value| is_present(value)) else {
        return GENERIC_FAILURE.to_string();
    };

    let detail = match payload.get("detail") {
        Some(inner) if !inner.is_null() => inner,
        _ => payload,
    };

    match detail {
        Value::String(text) => text.clone(),
        Value::Object(fields) => {
            let message = fields
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or(GENERIC_FAILURE);

            let issues = fields
                .get("issues")
                .and_then(Value::as_array)
                .map(|issues| issues.iter().filter_map(issue_text).collect::<Vec<_>>())
                .unwrap_or_default();

            if issues.is_empty() {
                message.to_string()
            } else {
                format!("{message} {}", issues.join(" ")).trim().to_string()
            }
        }
        _ => GENERIC_FAILURE.to_string(),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

fn issue_text(issue: &Value) -> Option<String> {
    match issue {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
