//! API error taxonomy

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Everything a request against the backend can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS, TLS, timeout and friends.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx status other than 422.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// 422 with the structured per-field error envelope.
    #[error("validation failed: {message}")]
    Validation { message: String, errors: HashMap<String, Vec<String>> },

    /// Body was not the JSON we were promised.
    #[error("decode error: {0}")]
    Decode(String),

    /// The owning view was disposed before the response resolved.
    #[error("operation cancelled")]
    Cancelled,
}

impl ApiError {
    /// Server-provided message suitable for a generic failure notification.
    pub fn server_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Validation { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// The 422 body shape: `{ message, errors: { field: [msg, ...] } }`.
#[derive(Debug, Deserialize)]
pub struct ValidationEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

/// Interpret an error-status body. 422 becomes [`ApiError::Validation`] when
/// the envelope parses; anything else keeps the server `message` if present.
pub fn error_from_body(status: u16, body: &Value) -> ApiError {
    if status == 422 {
        if let Ok(envelope) = serde_json::from_value::<ValidationEnvelope>(body.clone()) {
            return ApiError::Validation { message: envelope.message, errors: envelope.errors };
        }
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default();
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unprocessable_body_maps_to_validation() {
        let body = json!({
            "message": "The given data was invalid.",
            "errors": { "name": ["Name is required"], "email": ["Invalid email"] }
        });
        match error_from_body(422, &body) {
            ApiError::Validation { message, errors } => {
                assert_eq!(message, "The given data was invalid.");
                assert_eq!(errors["name"], vec!["Name is required"]);
                assert_eq!(errors["email"], vec!["Invalid email"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn unprocessable_without_envelope_still_validation_shaped() {
        // 422 with a bare message and no errors map: envelope fields default.
        let body = json!({ "message": "nope" });
        match error_from_body(422, &body) {
            ApiError::Validation { message, errors } => {
                assert_eq!(message, "nope");
                assert!(errors.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn other_statuses_keep_server_message() {
        let err = error_from_body(500, &json!({ "message": "boom" }));
        match &err {
            ApiError::Status { status, message } => {
                assert_eq!(*status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.server_message(), "boom");
    }

    #[test]
    fn missing_message_falls_back_to_display() {
        let err = error_from_body(503, &json!({}));
        assert_eq!(err.server_message(), "request failed (503): ");
    }
}
