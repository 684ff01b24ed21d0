//! HTTP transport for prompt submission.
//!
//! The controller talks to the AI endpoint through the [`Transport`] trait so
//! embedders can route requests through their own client. [`HttpTransport`]
//! is the `reqwest` implementation used by the binaries.

use crate::error::{CuratorError, Result};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// One outgoing POST.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    pub endpoint: String,
    pub body: Value,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer_token: Option<String>,
}

/// What came back from the endpoint, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Canonical reason phrase for `status`, empty if unknown.
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    /// Issue a JSON POST. Transport failures surface as `CuratorError::Network`;
    /// HTTP error statuses are returned as ordinary replies.
    fn post(&self, request: &OutgoingRequest) -> impl Future<Output = Result<HttpReply>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport. `timeout` of `None` waits as long as the server does.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CuratorError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn post(&self, request: &OutgoingRequest) -> Result<HttpReply> {
        let mut builder = self
            .client
            .post(&request.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(request.body.to_string());
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CuratorError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CuratorError::Network(e.to_string()))?;

        Ok(HttpReply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
