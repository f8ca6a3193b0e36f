//! Campus API client
//!
//! The HTTP collaborator consumed by the record engines: four JSON verbs
//! against a REST backend, a structured error taxonomy, and an explicitly
//! injected [`Session`] carrying the bearer token. The engines depend only on
//! the [`Api`] trait, so tests run against in-memory implementations.

pub mod error;
pub mod http;
pub mod session;

use async_trait::async_trait;
use serde_json::Value;

pub use error::ApiError;
pub use http::HttpApi;
pub use session::Session;

/// The four-verb JSON contract the record engines are written against.
#[async_trait]
pub trait Api: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, ApiError>;
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
    async fn delete(&self, path: &str) -> Result<Value, ApiError>;
}
