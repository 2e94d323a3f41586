use crate::error_code::StandardErrorCode;
use crate::transport::TransportError;
use crate::types::response::ErrorEntry;
use serde_json::Value;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "template.components[2].index", "messages[0].id")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "component_assembler", "response_classifier")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for message composition and delivery.
///
/// Every variant folds into the `error` list of a
/// [`ResponseOutcome`](crate::ResponseOutcome) through [`Error::serialize_error`].
#[derive(Debug, Error)]
pub enum Error {
    /// The remote answered with a success status but the body does not have
    /// the expected message-response shape.
    #[error("{message}{}", format_context(.context))]
    SchemaValidation {
        message: String,
        body: Value,
        context: ErrorContext,
    },

    /// The remote answered with an error body.
    #[error("Remote error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
        details: Option<Value>,
    },

    /// No response reached us (connect failure, timeout, TLS, ...).
    #[error("Network transport error: {0}")]
    Transport(TransportError),

    /// The typed input cannot be turned into a valid payload.
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl From<TransportError> for Error {
    /// Splits transport failures by whether the remote produced a body.
    fn from(err: TransportError) -> Self {
        let status = match &err {
            TransportError::Status { status, .. } => *status,
            _ => return Error::Transport(err),
        };
        Error::Api {
            message: format!("Request failed with status code {}", status),
            status: Some(status),
            details: err
                .response_body()
                .and_then(|body| body.get("error"))
                .cloned(),
        }
    }
}

impl Error {
    pub fn schema_validation(body: Value, context: ErrorContext) -> Self {
        Error::SchemaValidation {
            message: "Invalid schema format".to_string(),
            body,
            context,
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::SchemaValidation { context, .. }
            | Error::Validation { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Best-effort mapping onto the standard error codes.
    pub fn standard_code(&self) -> StandardErrorCode {
        match self {
            Error::SchemaValidation { .. } => StandardErrorCode::SchemaViolation,
            Error::Api {
                status, details, ..
            } => details
                .as_ref()
                .and_then(|d| d.get("code"))
                .and_then(Value::as_i64)
                .and_then(StandardErrorCode::from_graph_code)
                .or_else(|| status.map(StandardErrorCode::from_http_status))
                .unwrap_or(StandardErrorCode::Unknown),
            Error::Transport(e) if e.is_timeout() => StandardErrorCode::Timeout,
            Error::Transport(_) => StandardErrorCode::Network,
            Error::Validation { .. } | Error::Serialization(_) => {
                StandardErrorCode::InvalidRequest
            }
            Error::Configuration { .. } => StandardErrorCode::Configuration,
        }
    }

    /// Serialize into the `{message, details?}` entries of an error outcome.
    pub fn serialize_error(&self) -> Vec<ErrorEntry> {
        match self {
            Error::SchemaValidation { message, body, .. } => {
                vec![ErrorEntry::new(message.clone(), Some(body.clone()))]
            }
            Error::Api {
                message, details, ..
            } => vec![ErrorEntry::new(message.clone(), details.clone())],
            Error::Transport(e) => vec![ErrorEntry::new(e.message(), None)],
            Error::Validation { message, context } | Error::Configuration { message, context } => {
                let details = context
                    .field_path
                    .as_ref()
                    .map(|path| serde_json::json!({ "field": path }));
                vec![ErrorEntry::new(message.clone(), details)]
            }
            Error::Serialization(e) => vec![ErrorEntry::new(e.to_string(), None)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_failure_becomes_api_error_with_error_field() {
        let err: Error = TransportError::Status {
            status: 400,
            body: json!({"error": {"message": "bad", "code": 131009}}),
        }
        .into();
        let entries = err.serialize_error();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "Request failed with status code 400");
        assert_eq!(
            entries[0].details,
            Some(json!({"message": "bad", "code": 131009}))
        );
        assert_eq!(err.standard_code(), StandardErrorCode::InvalidRequest);
    }

    #[test]
    fn status_failure_without_error_field_has_no_details() {
        let err: Error = TransportError::Status {
            status: 502,
            body: json!("<html>bad gateway</html>"),
        }
        .into();
        assert!(matches!(err, Error::Api { .. }));
        assert_eq!(err.serialize_error()[0].details, None);
        assert_eq!(err.standard_code(), StandardErrorCode::Unavailable);
    }

    #[test]
    fn api_error_without_status_or_code_is_unknown() {
        let err = Error::Api {
            message: "remote rejected the request".into(),
            status: None,
            details: Some(json!({"message": "no numeric code"})),
        };
        assert_eq!(err.standard_code(), StandardErrorCode::Unknown);
    }

    #[test]
    fn transport_failure_carries_only_the_message() {
        let err: Error = TransportError::Other("connection refused".into()).into();
        let entries = err.serialize_error();
        assert_eq!(entries, vec![ErrorEntry::new("connection refused", None)]);
        assert_eq!(err.standard_code(), StandardErrorCode::Network);
    }

    #[test]
    fn schema_failure_attaches_raw_body() {
        let body = json!({"messaging_product": "whatsapp"});
        let err = Error::schema_validation(body.clone(), ErrorContext::new());
        let entries = err.serialize_error();
        assert_eq!(entries[0].message, "Invalid schema format");
        assert_eq!(entries[0].details, Some(body));
    }

    #[test]
    fn validation_context_is_displayed() {
        let err = Error::validation_with_context(
            "duplicate quick reply index 1",
            ErrorContext::new()
                .with_field_path("template.quick_replies[1].index")
                .with_source("component_assembler"),
        );
        let text = err.to_string();
        assert!(text.contains("field: template.quick_replies[1].index"));
        assert!(text.contains("source: component_assembler"));
        assert_eq!(
            err.serialize_error()[0].details,
            Some(json!({"field": "template.quick_replies[1].index"}))
        );
    }
}
