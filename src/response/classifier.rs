//! Structural validation of message-send responses.

use crate::types::response::{Contact, MessageResponse, SentMessage};
use crate::{Error, ErrorContext, Result};
use serde_json::{Map, Value};

type Check<T> = std::result::Result<T, ErrorContext>;

fn string_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

fn violation(path: String) -> ErrorContext {
    ErrorContext::new()
        .with_field_path(path)
        .with_details("expected a string")
        .with_source("response_classifier")
}

fn list<'a>(root: &'a Map<String, Value>, key: &str) -> Check<&'a Vec<Value>> {
    root.get(key).and_then(Value::as_array).ok_or_else(|| {
        ErrorContext::new()
            .with_field_path(key)
            .with_details("expected a list")
            .with_source("response_classifier")
    })
}

fn project(body: &Value) -> Check<MessageResponse> {
    let root = body.as_object().ok_or_else(|| {
        ErrorContext::new()
            .with_details("expected an object")
            .with_source("response_classifier")
    })?;

    let messaging_product = string_field(root, "messaging_product")
        .ok_or_else(|| violation("messaging_product".into()))?
        .to_string();

    let messages = list(root, "messages")?
        .iter()
        .enumerate()
        .map(|(i, entry)| -> Check<SentMessage> {
            let entry = entry.as_object();
            let id = entry
                .and_then(|m| string_field(m, "id"))
                .ok_or_else(|| violation(format!("messages[{}].id", i)))?;
            Ok(SentMessage {
                id: id.to_string(),
                message_status: entry
                    .and_then(|m| string_field(m, "message_status"))
                    .map(str::to_string),
            })
        })
        .collect::<Check<Vec<_>>>()?;

    let contacts = list(root, "contacts")?
        .iter()
        .enumerate()
        .map(|(i, entry)| -> Check<Contact> {
            let entry = entry.as_object();
            let input = entry
                .and_then(|c| string_field(c, "input"))
                .ok_or_else(|| violation(format!("contacts[{}].input", i)))?;
            let wa_id = entry
                .and_then(|c| string_field(c, "wa_id"))
                .ok_or_else(|| violation(format!("contacts[{}].wa_id", i)))?;
            Ok(Contact {
                input: input.to_string(),
                wa_id: wa_id.to_string(),
            })
        })
        .collect::<Check<Vec<_>>>()?;

    Ok(MessageResponse {
        messaging_product,
        contacts,
        messages,
    })
}

/// Classify a decoded success body.
///
/// Accepts the body only when `messaging_product` is a string, `messages` is a
/// list of objects with a string `id`, and `contacts` is a list of objects with
/// string `input` and `wa_id`. Only those fields (plus a string
/// `message_status`) are carried into the result. Anything else yields
/// [`Error::SchemaValidation`] with the raw body attached.
pub fn classify(body: &Value) -> Result<MessageResponse> {
    project(body).map_err(|context| {
        tracing::warn!(
            field = context.field_path.as_deref().unwrap_or("<root>"),
            "response body does not match the message response shape"
        );
        Error::schema_validation(body.clone(), context)
    })
}

/// Cheap yes/no form of [`classify`].
pub fn is_message_response(body: &Value) -> bool {
    project(body).is_ok()
}
