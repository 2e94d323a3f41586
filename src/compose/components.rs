//! Component assembly for template, carousel and catalog sends.
//!
//! All builders are pure: the same input always yields the same components.
//! Optional parts are omitted rather than emitted empty, since the template
//! endpoint rejects empty `components` and `parameters` arrays.

use crate::types::parameter::{CatalogAction, ProductRef};
use crate::types::template::{
    CardButton, CardHeader, CarouselCard, CarouselTemplate, CatalogTemplate,
    ProductCarouselTemplate, TemplateComponents,
};
use crate::types::TemplateParameter;
use crate::{Error, ErrorContext, Result};
use serde::Serialize;
use std::collections::HashSet;

pub const MAX_QUICK_REPLIES: usize = 3;
pub const MAX_QUICK_REPLY_INDEX: u8 = 2;
pub const MAX_CAROUSEL_CARDS: usize = 10;
pub const MAX_CARD_BUTTONS: usize = 2;
pub const MAX_CARD_BUTTON_INDEX: u8 = 1;

/// One entry of a `components` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Header {
        parameters: Vec<TemplateParameter>,
    },
    Body {
        parameters: Vec<TemplateParameter>,
    },
    Button {
        sub_type: ButtonSubType,
        index: u8,
        parameters: Vec<TemplateParameter>,
    },
    Carousel {
        cards: Vec<Card>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonSubType {
    #[serde(rename = "quick_reply")]
    QuickReply,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "CATALOG")]
    Catalog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub card_index: usize,
    pub components: Vec<Component>,
}

fn assembler_error(message: String, field_path: String) -> Error {
    Error::validation_with_context(
        message,
        ErrorContext::new()
            .with_field_path(field_path)
            .with_source("component_assembler"),
    )
}

fn text_parameters(values: &[String]) -> Vec<TemplateParameter> {
    values.iter().map(TemplateParameter::text).collect()
}

fn body_component(parameters: Vec<TemplateParameter>) -> Option<Component> {
    (!parameters.is_empty()).then_some(Component::Body { parameters })
}

/// Components of a plain template: header, body, then quick replies.
///
/// Returns `Ok(None)` when nothing would be emitted; the caller must then omit
/// the `components` key. Quick-reply indices are kept as given but must lie in
/// `0..=2` and must not repeat.
pub fn template_components(components: Option<&TemplateComponents>) -> Result<Option<Vec<Component>>> {
    let Some(components) = components else {
        return Ok(None);
    };

    if components.quick_replies.len() > MAX_QUICK_REPLIES {
        return Err(assembler_error(
            format!(
                "at most {} quick replies are allowed, got {}",
                MAX_QUICK_REPLIES,
                components.quick_replies.len()
            ),
            "template.components.quick_replies".into(),
        ));
    }

    let mut seen = HashSet::new();
    for (pos, reply) in components.quick_replies.iter().enumerate() {
        if reply.index > MAX_QUICK_REPLY_INDEX {
            return Err(assembler_error(
                format!(
                    "quick reply index {} is out of range 0..={}",
                    reply.index, MAX_QUICK_REPLY_INDEX
                ),
                format!("template.components.quick_replies[{}].index", pos),
            ));
        }
        if !seen.insert(reply.index) {
            return Err(assembler_error(
                format!("duplicate quick reply index {}", reply.index),
                format!("template.components.quick_replies[{}].index", pos),
            ));
        }
    }

    let mut out = Vec::new();
    if let Some(header) = &components.header {
        out.push(Component::Header {
            parameters: vec![header.clone().into()],
        });
    }
    if let Some(body) = components.body.clone().and_then(body_component) {
        out.push(body);
    }
    out.extend(components.quick_replies.iter().map(|reply| Component::Button {
        sub_type: ButtonSubType::QuickReply,
        index: reply.index,
        parameters: vec![TemplateParameter::payload(reply.payload.clone())],
    }));

    Ok((!out.is_empty()).then_some(out))
}

fn check_card_count(count: usize, path: &str) -> Result<()> {
    if count == 0 || count > MAX_CAROUSEL_CARDS {
        return Err(assembler_error(
            format!(
                "a carousel needs 1 to {} cards, got {}",
                MAX_CAROUSEL_CARDS, count
            ),
            path.to_string(),
        ));
    }
    Ok(())
}

fn card_header(header: &CardHeader) -> Component {
    let parameter = match header {
        CardHeader::Image { image } => TemplateParameter::image(image.as_link()),
        CardHeader::Video { video } => TemplateParameter::video(video.as_link()),
    };
    Component::Header {
        parameters: vec![parameter],
    }
}

fn card_button(button: &CardButton) -> Component {
    match button {
        CardButton::QuickReply { index, payload } => Component::Button {
            sub_type: ButtonSubType::QuickReply,
            index: *index,
            parameters: vec![TemplateParameter::payload(payload.clone())],
        },
        CardButton::Url { index, text } => Component::Button {
            sub_type: ButtonSubType::Url,
            index: *index,
            parameters: vec![TemplateParameter::text(text.clone())],
        },
    }
}

fn media_card(position: usize, card: &CarouselCard) -> Result<Card> {
    if card.buttons.is_empty() || card.buttons.len() > MAX_CARD_BUTTONS {
        return Err(assembler_error(
            format!(
                "a carousel card needs 1 to {} buttons, got {}",
                MAX_CARD_BUTTONS,
                card.buttons.len()
            ),
            format!("cards[{}].buttons", position),
        ));
    }
    if let Some(pos) = card
        .buttons
        .iter()
        .position(|b| b.index() > MAX_CARD_BUTTON_INDEX)
    {
        return Err(assembler_error(
            format!(
                "card button index {} is out of range 0..={}",
                card.buttons[pos].index(),
                MAX_CARD_BUTTON_INDEX
            ),
            format!("cards[{}].buttons[{}].index", position, pos),
        ));
    }

    let mut components = vec![card_header(&card.header)];
    if let Some(body) = card.body.as_deref().map(text_parameters).and_then(body_component) {
        components.push(body);
    }
    components.extend(card.buttons.iter().map(card_button));

    Ok(Card {
        card_index: position,
        components,
    })
}

/// Components of a media carousel: optional body, then one carousel entry.
///
/// Card indices are assigned from list position.
pub fn media_carousel_components(template: &CarouselTemplate) -> Result<Vec<Component>> {
    check_card_count(template.cards.len(), "cards")?;

    let cards = template
        .cards
        .iter()
        .enumerate()
        .map(|(position, card)| media_card(position, card))
        .collect::<Result<Vec<_>>>()?;

    let mut out = Vec::with_capacity(2);
    if let Some(body) = template
        .body
        .as_deref()
        .map(text_parameters)
        .and_then(body_component)
    {
        out.push(body);
    }
    out.push(Component::Carousel { cards });
    Ok(out)
}

/// Components of a product carousel: optional body, then one carousel entry
/// whose cards each hold a single product header.
pub fn product_carousel_components(template: &ProductCarouselTemplate) -> Result<Vec<Component>> {
    check_card_count(template.cards.len(), "cards")?;

    let cards = template
        .cards
        .iter()
        .enumerate()
        .map(|(position, card)| Card {
            card_index: position,
            components: vec![Component::Header {
                parameters: vec![TemplateParameter::Product {
                    product: ProductRef {
                        product_retailer_id: card.product_retailer_id.clone(),
                        catalog_id: card.catalog_id.clone(),
                    },
                }],
            }],
        })
        .collect();

    let mut out = Vec::with_capacity(2);
    if let Some(body) = template
        .body
        .clone()
        .map(|params| {
            params
                .into_iter()
                .map(TemplateParameter::from)
                .collect::<Vec<_>>()
        })
        .and_then(body_component)
    {
        out.push(body);
    }
    out.push(Component::Carousel { cards });
    Ok(out)
}

/// Components of a catalog send: optional text body, then the fixed
/// `CATALOG` button at index 0.
pub fn catalog_components(template: &CatalogTemplate) -> Vec<Component> {
    let mut out = Vec::with_capacity(2);
    if let Some(body) = template
        .body
        .as_deref()
        .map(text_parameters)
        .and_then(body_component)
    {
        out.push(body);
    }
    out.push(Component::Button {
        sub_type: ButtonSubType::Catalog,
        index: 0,
        parameters: vec![TemplateParameter::Action {
            action: CatalogAction {
                thumbnail_product_retailer_id: template.thumbnail_product_retailer_id.clone(),
            },
        }],
    });
    out
}
