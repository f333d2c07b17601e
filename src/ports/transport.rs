//! HTTP Transport Port
//!
//! The client never talks to the network directly; it goes through this
//! trait so tests can substitute a mock and exercise retry and endpoint
//! selection without sockets. The production implementation lives in
//! `adapters::api::transport`.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;

/// A JSON-over-HTTP transport with GET and POST.
///
/// Implementors own timeout, proxy, and header concerns, and classify
/// HTTP failures into retryable/non-retryable `ApiError` variants.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and parse the response body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;

    /// POST `body` as JSON to `url` and parse the response body as JSON.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
}
