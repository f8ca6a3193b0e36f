//! reqwest-backed API client

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::error::{error_from_body, ApiError};
use crate::session::Session;
use crate::Api;

/// HTTP client against the school-management backend.
///
/// Successful bodies may be the raw record/collection or the
/// `{ "data": ... }` envelope; both are accepted and the envelope is
/// unwrapped. Timeouts are reqwest defaults; there is no retry policy.
pub struct HttpApi {
    base_url: String,
    session: Session,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: reqwest::Client::new(),
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method.clone(), &url);
        if let Some(bearer) = self.session.bearer() {
            req = req.header("Authorization", bearer);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body: Value = if status == StatusCode::NO_CONTENT {
            Value::Null
        } else {
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?
        };

        if status.is_success() {
            Ok(unwrap_envelope(body))
        } else {
            tracing::debug!(%method, %url, status = status.as_u16(), "request failed");
            Err(error_from_body(status.as_u16(), &body))
        }
    }
}

/// Unwrap `{ "data": ... }`, falling back to the raw body.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_is_unwrapped() {
        let body = json!({ "data": [ { "id": 1 } ] });
        assert_eq!(unwrap_envelope(body), json!([ { "id": 1 } ]));
    }

    #[test]
    fn raw_bodies_pass_through() {
        let body = json!([ { "id": 1 } ]);
        assert_eq!(unwrap_envelope(body.clone()), body);

        let record = json!({ "id": 1, "name": "Ada" });
        assert_eq!(unwrap_envelope(record.clone()), record);
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpApi::new("https://school.example/api/", Session::anonymous());
        assert_eq!(api.base_url, "https://school.example/api");
    }
}
