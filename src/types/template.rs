//! Typed inputs for template, carousel and catalog sends.

use super::media::MediaLink;
use super::parameter::{CarouselBodyParameter, TemplateParameter};
use serde::{Deserialize, Serialize};

/// `{"code": "en_US"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        Self {
            code: value.to_string(),
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self { code }
    }
}

/// Header parameter of a template, also used as interactive message header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HeaderParameter {
    Text { text: String },
    Image { image: MediaLink },
    Video { video: MediaLink },
    Document { document: MediaLink },
}

impl From<HeaderParameter> for TemplateParameter {
    fn from(value: HeaderParameter) -> Self {
        match value {
            HeaderParameter::Text { text } => TemplateParameter::Text { text },
            HeaderParameter::Image { image } => TemplateParameter::Image { image },
            HeaderParameter::Video { video } => TemplateParameter::Video { video },
            HeaderParameter::Document { document } => TemplateParameter::Document { document },
        }
    }
}

/// A quick-reply button of a template. `index` is the button's slot (0..=2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub index: u8,
    pub payload: String,
}

impl QuickReply {
    pub fn new(index: u8, payload: impl Into<String>) -> Self {
        Self {
            index,
            payload: payload.into(),
        }
    }
}

/// Components of a plain template send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateComponents {
    #[serde(default)]
    pub header: Option<HeaderParameter>,
    #[serde(default)]
    pub body: Option<Vec<TemplateParameter>>,
    #[serde(default)]
    pub quick_replies: Vec<QuickReply>,
}

impl TemplateComponents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: HeaderParameter) -> Self {
        self.header = Some(header);
        self
    }

    pub fn body(mut self, parameters: Vec<TemplateParameter>) -> Self {
        self.body = Some(parameters);
        self
    }

    pub fn quick_reply(mut self, reply: QuickReply) -> Self {
        self.quick_replies.push(reply);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMessage {
    pub name: String,
    pub language: Language,
    #[serde(default)]
    pub components: Option<TemplateComponents>,
}

impl TemplateMessage {
    pub fn new(name: impl Into<String>, language: impl Into<Language>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            components: None,
        }
    }

    pub fn with_components(mut self, components: TemplateComponents) -> Self {
        self.components = Some(components);
        self
    }
}

/// Header of a media carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CardHeader {
    Image { image: MediaLink },
    Video { video: MediaLink },
}

/// Carousel card button; `index` is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "sub_type", rename_all = "snake_case")]
pub enum CardButton {
    QuickReply { index: u8, payload: String },
    Url { index: u8, text: String },
}

impl CardButton {
    pub fn index(&self) -> u8 {
        match self {
            CardButton::QuickReply { index, .. } | CardButton::Url { index, .. } => *index,
        }
    }
}

/// One card of a media carousel. The card's index is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselCard {
    pub header: CardHeader,
    #[serde(default)]
    pub body: Option<Vec<String>>,
    pub buttons: Vec<CardButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselTemplate {
    pub name: String,
    pub language: Language,
    #[serde(default)]
    pub body: Option<Vec<String>>,
    pub cards: Vec<CarouselCard>,
}

/// One card of a product carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub product_retailer_id: String,
    pub catalog_id: String,
}

impl ProductCard {
    pub fn new(product_retailer_id: impl Into<String>, catalog_id: impl Into<String>) -> Self {
        Self {
            product_retailer_id: product_retailer_id.into(),
            catalog_id: catalog_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCarouselTemplate {
    pub name: String,
    pub language: Language,
    #[serde(default)]
    pub body: Option<Vec<CarouselBodyParameter>>,
    pub cards: Vec<ProductCard>,
}

/// Catalog template: body strings plus the product used as thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTemplate {
    pub name: String,
    pub language: Language,
    #[serde(default)]
    pub body: Option<Vec<String>>,
    pub thumbnail_product_retailer_id: String,
}
