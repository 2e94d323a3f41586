//! Folding failures into the uniform error list.

use crate::types::response::{ErrorEntry, MessageResponse, ResponseOutcome};
use crate::{Error, Result};

/// Error list for a crate error.
pub fn normalize(err: &Error) -> Vec<ErrorEntry> {
    err.serialize_error()
}

/// Turn the result of one send into its outcome.
pub fn fold(result: Result<MessageResponse>) -> ResponseOutcome {
    if let Err(err) = &result {
        tracing::debug!(code = %err.standard_code(), error = %err, "send failed");
    }
    ResponseOutcome::from(result)
}
