//! Reqwest Transport
//!
//! Production `Transport` implementation: JSON over HTTPS with the
//! configured timeout, optional proxy, and the `X-API-KEY` header on
//! every request. Classifies HTTP failures so the orchestrator's retry
//! loop only re-attempts what can plausibly succeed.

use async_trait::async_trait;
use reqwest::{Client, Proxy, RequestBuilder, Response};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::ports::Transport;

/// HTTP transport backed by `reqwest`.
pub struct ReqwestTransport {
    http: Client,
    api_key: Option<String>,
}

impl ReqwestTransport {
    /// Build the transport from client configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().timeout(config.timeout());
        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| ApiError::Config(format!("invalid proxy url: {e}")))?;
            builder = builder.proxy(proxy);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self { http, api_key: config.api_key.clone() })
    }

    fn apply_headers(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("X-API-KEY", key),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = self
            .apply_headers(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::into_json(response).await
    }

    async fn into_json(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Transport(format!("invalid json body: {e}")))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status { status: status.as_u16(), body })
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        self.execute(self.http.get(url)).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(self.http.post(url).json(body)).await
    }
}
