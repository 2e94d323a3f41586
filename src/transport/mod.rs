//! Transport seam between the client facade and the network.
//!
//! The facade only needs "POST this JSON to this path" and the headers that
//! go with it. [`HttpTransport`] is the reqwest-backed default; tests and
//! embedders can inject any other [`Transport`].

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `path` (relative to the versioned base URL) and return
    /// the decoded success body.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;

    /// Headers attached to every request.
    fn headers(&self) -> &HashMap<String, String>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-success status. `body` is the decoded
    /// JSON, or the raw text as a JSON string when it was not JSON.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: Value },

    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Body sent back by the remote, if the request got that far.
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            TransportError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Message of the underlying failure, without prefixes.
    pub fn message(&self) -> String {
        match self {
            TransportError::Http(e) => e.to_string(),
            TransportError::Other(msg) => msg.clone(),
            status @ TransportError::Status { .. } => status.to_string(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }
}
