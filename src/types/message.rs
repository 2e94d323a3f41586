//! Outbound message inputs.

use super::media::MediaReference;
use super::template::{
    CarouselTemplate, CatalogTemplate, HeaderParameter, ProductCarouselTemplate, TemplateMessage,
};
use serde::{Deserialize, Serialize};

/// Everything this crate knows how to send, one variant per message family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutboundMessage {
    Text(TextMessage),
    Image(MediaReference),
    Video(MediaReference),
    Template(TemplateMessage),
    MediaCarousel(CarouselTemplate),
    ProductCarousel(ProductCarouselTemplate),
    Catalog(CatalogTemplate),
    InteractiveButtons(InteractiveButtons),
    InteractiveList(InteractiveList),
    Location(Location),
}

impl OutboundMessage {
    pub fn text(body: impl Into<String>) -> Self {
        OutboundMessage::Text(TextMessage::new(body))
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::Text(_) => "text",
            OutboundMessage::Image(_) => "image",
            OutboundMessage::Video(_) => "video",
            OutboundMessage::Template(_) => "template",
            OutboundMessage::MediaCarousel(_) => "media_carousel",
            OutboundMessage::ProductCarousel(_) => "product_carousel",
            OutboundMessage::Catalog(_) => "catalog",
            OutboundMessage::InteractiveButtons(_) => "interactive_buttons",
            OutboundMessage::InteractiveList(_) => "interactive_list",
            OutboundMessage::Location(_) => "location",
        }
    }
}

/// Plain text message. Link previews are on unless disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessage {
    #[serde(default = "default_preview_url")]
    pub preview_url: bool,
    pub body: String,
}

fn default_preview_url() -> bool {
    true
}

impl TextMessage {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            preview_url: true,
            body: body.into(),
        }
    }

    pub fn with_preview_url(mut self, enable: bool) -> Self {
        self.preview_url = enable;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyButton {
    pub id: String,
    pub title: String,
}

impl ReplyButton {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Reply-button message: 1 to 3 buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveButtons {
    pub body: String,
    #[serde(default)]
    pub header: Option<HeaderParameter>,
    #[serde(default)]
    pub footer: Option<String>,
    pub buttons: Vec<ReplyButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    pub title: String,
    pub rows: Vec<ListRow>,
}

/// List message. `button` is the label of the button opening the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveList {
    pub body: String,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    pub button: String,
    pub sections: Vec<ListSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
            address: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.address = Some(address.into());
        self
    }
}
