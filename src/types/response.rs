//! Normalized send results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of every send: callers branch on `status`, never on transport details.
///
/// Serializes as `{"status": "success", ...}` or
/// `{"status": "error", "error": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponseOutcome {
    Success(MessageResponse),
    Error { error: Vec<ErrorEntry> },
}

impl ResponseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success(_))
    }

    pub fn success(&self) -> Option<&MessageResponse> {
        match self {
            ResponseOutcome::Success(resp) => Some(resp),
            ResponseOutcome::Error { .. } => None,
        }
    }

    pub fn errors(&self) -> &[ErrorEntry] {
        match self {
            ResponseOutcome::Success(_) => &[],
            ResponseOutcome::Error { error } => error,
        }
    }
}

impl From<crate::Result<MessageResponse>> for ResponseOutcome {
    fn from(result: crate::Result<MessageResponse>) -> Self {
        match result {
            Ok(resp) => ResponseOutcome::Success(resp),
            Err(err) => ResponseOutcome::Error {
                error: crate::response::normalize(&err),
            },
        }
    }
}

/// Validated success body of the messages endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub messaging_product: String,
    pub contacts: Vec<Contact>,
    pub messages: Vec<SentMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub input: String,
    pub wa_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_status: Option<String>,
}

/// One entry of an error outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorEntry {
    pub fn new(message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outcome_is_tagged_by_status() {
        let ok = ResponseOutcome::Success(MessageResponse {
            messaging_product: "whatsapp".into(),
            contacts: vec![Contact {
                input: "15551234567".into(),
                wa_id: "15551234567".into(),
            }],
            messages: vec![SentMessage {
                id: "wamid.1".into(),
                message_status: None,
            }],
        });
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({
                "status": "success",
                "messaging_product": "whatsapp",
                "contacts": [{"input": "15551234567", "wa_id": "15551234567"}],
                "messages": [{"id": "wamid.1"}]
            })
        );

        let err = ResponseOutcome::Error {
            error: vec![ErrorEntry::new("timeout", None)],
        };
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"status": "error", "error": [{"message": "timeout"}]})
        );
        assert!(err.success().is_none());
        assert_eq!(err.errors().len(), 1);
    }
}
