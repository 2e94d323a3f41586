//! Message envelope construction.

use super::components::{
    catalog_components, media_carousel_components, product_carousel_components,
    template_components, Component,
};
use crate::types::message::{InteractiveButtons, InteractiveList, ListSection, ReplyButton};
use crate::types::template::{HeaderParameter, Language};
use crate::types::{Location, OutboundMessage, ResolvedMedia, TextMessage};
use crate::{Error, ErrorContext, Result};
use serde::Serialize;

pub const MAX_REPLY_BUTTONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagingProduct {
    Whatsapp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    Individual,
}

/// Body posted to `/{phone_number_id}/messages`.
///
/// `type` and the payload key are produced by the same [`Payload`] variant, so
/// they always agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageEnvelope {
    messaging_product: MessagingProduct,
    recipient_type: RecipientType,
    pub to: String,
    #[serde(flatten)]
    pub payload: Payload,
}

impl MessageEnvelope {
    pub fn new(to: impl Into<String>, payload: Payload) -> Self {
        Self {
            messaging_product: MessagingProduct::Whatsapp,
            recipient_type: RecipientType::Individual,
            to: to.into(),
            payload,
        }
    }

    /// The envelope's `type` value.
    pub fn kind(&self) -> &'static str {
        match self.payload {
            Payload::Text { .. } => "text",
            Payload::Image { .. } => "image",
            Payload::Video { .. } => "video",
            Payload::Template { .. } => "template",
            Payload::Interactive { .. } => "interactive",
            Payload::Location { .. } => "location",
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Payload {
    Text { text: TextMessage },
    Image { image: ResolvedMedia },
    Video { video: ResolvedMedia },
    Template { template: TemplateBody },
    Interactive { interactive: InteractiveBody },
    Location { location: Location },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateBody {
    pub name: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject {
    pub text: String,
}

impl TextObject {
    fn wrap(text: &Option<String>) -> Option<Self> {
        text.as_ref().map(|text| TextObject { text: text.clone() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InteractiveBody {
    Button {
        #[serde(skip_serializing_if = "Option::is_none")]
        header: Option<HeaderParameter>,
        body: TextObject,
        #[serde(skip_serializing_if = "Option::is_none")]
        footer: Option<TextObject>,
        action: ButtonAction,
    },
    List {
        #[serde(skip_serializing_if = "Option::is_none")]
        header: Option<HeaderParameter>,
        body: TextObject,
        #[serde(skip_serializing_if = "Option::is_none")]
        footer: Option<TextObject>,
        action: ListAction,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonAction {
    pub buttons: Vec<ButtonReply>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ButtonReply {
    Reply { reply: ReplyButton },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListAction {
    pub button: String,
    pub sections: Vec<ListSection>,
}

fn builder_error(message: String, field_path: &str) -> Error {
    Error::validation_with_context(
        message,
        ErrorContext::new()
            .with_field_path(field_path)
            .with_source("payload_builder"),
    )
}

fn template_body(
    name: &str,
    language: &Language,
    components: Option<Vec<Component>>,
) -> Payload {
    Payload::Template {
        template: TemplateBody {
            name: name.to_string(),
            language: language.clone(),
            components,
        },
    }
}

fn button_body(message: &InteractiveButtons) -> Result<InteractiveBody> {
    if message.buttons.is_empty() || message.buttons.len() > MAX_REPLY_BUTTONS {
        return Err(builder_error(
            format!(
                "reply button messages need 1 to {} buttons, got {}",
                MAX_REPLY_BUTTONS,
                message.buttons.len()
            ),
            "interactive.action.buttons",
        ));
    }
    Ok(InteractiveBody::Button {
        header: message.header.clone(),
        body: TextObject {
            text: message.body.clone(),
        },
        footer: TextObject::wrap(&message.footer),
        action: ButtonAction {
            buttons: message
                .buttons
                .iter()
                .cloned()
                .map(|reply| ButtonReply::Reply { reply })
                .collect(),
        },
    })
}

fn list_body(message: &InteractiveList) -> Result<InteractiveBody> {
    if message.sections.is_empty() {
        return Err(builder_error(
            "list messages need at least one section".to_string(),
            "interactive.action.sections",
        ));
    }
    if let Some(pos) = message.sections.iter().position(|s| s.rows.is_empty()) {
        return Err(builder_error(
            format!("list section {} has no rows", pos),
            &format!("interactive.action.sections[{}].rows", pos),
        ));
    }
    Ok(InteractiveBody::List {
        header: message
            .header
            .as_ref()
            .map(|text| HeaderParameter::Text { text: text.clone() }),
        body: TextObject {
            text: message.body.clone(),
        },
        footer: TextObject::wrap(&message.footer),
        action: ListAction {
            button: message.button.clone(),
            sections: message.sections.clone(),
        },
    })
}

/// Turn a typed message into the envelope for recipient `to`.
pub fn build_envelope(to: &str, message: &OutboundMessage) -> Result<MessageEnvelope> {
    let payload = match message {
        OutboundMessage::Text(text) => Payload::Text { text: text.clone() },
        OutboundMessage::Image(media) => Payload::Image {
            image: media.resolve(),
        },
        OutboundMessage::Video(media) => Payload::Video {
            video: media.resolve(),
        },
        OutboundMessage::Template(t) => template_body(
            &t.name,
            &t.language,
            template_components(t.components.as_ref())?,
        ),
        OutboundMessage::MediaCarousel(t) => {
            template_body(&t.name, &t.language, Some(media_carousel_components(t)?))
        }
        OutboundMessage::ProductCarousel(t) => {
            template_body(&t.name, &t.language, Some(product_carousel_components(t)?))
        }
        OutboundMessage::Catalog(t) => {
            template_body(&t.name, &t.language, Some(catalog_components(t)))
        }
        OutboundMessage::InteractiveButtons(m) => Payload::Interactive {
            interactive: button_body(m)?,
        },
        OutboundMessage::InteractiveList(m) => Payload::Interactive {
            interactive: list_body(m)?,
        },
        OutboundMessage::Location(location) => Payload::Location {
            location: location.clone(),
        },
    };
    Ok(MessageEnvelope::new(to, payload))
}
