//! Template parameters.

use super::media::MediaLink;
use serde::{Deserialize, Serialize};

/// One entry of a component's `parameters` array.
///
/// The serde tag is the API's own `type` field, so each variant serializes to
/// exactly the object the template endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemplateParameter {
    Text { text: String },
    Image { image: MediaLink },
    Video { video: MediaLink },
    Document { document: MediaLink },
    Currency { currency: Currency },
    DateTime { date_time: DateTime },
    Payload { payload: String },
    Action { action: CatalogAction },
    Product { product: ProductRef },
}

impl TemplateParameter {
    pub fn text(text: impl Into<String>) -> Self {
        TemplateParameter::Text { text: text.into() }
    }

    pub fn image(image: MediaLink) -> Self {
        TemplateParameter::Image { image }
    }

    pub fn video(video: MediaLink) -> Self {
        TemplateParameter::Video { video }
    }

    pub fn document(document: MediaLink) -> Self {
        TemplateParameter::Document { document }
    }

    /// `amount_1000` is the amount multiplied by 1000 (e.g. 12.99 -> 12990).
    pub fn currency(
        fallback_value: impl Into<String>,
        code: impl Into<String>,
        amount_1000: i64,
    ) -> Self {
        TemplateParameter::Currency {
            currency: Currency {
                fallback_value: fallback_value.into(),
                code: code.into(),
                amount_1000,
            },
        }
    }

    pub fn date_time(fallback_value: impl Into<String>) -> Self {
        TemplateParameter::DateTime {
            date_time: DateTime {
                fallback_value: fallback_value.into(),
            },
        }
    }

    pub fn payload(payload: impl Into<String>) -> Self {
        TemplateParameter::Payload {
            payload: payload.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub fallback_value: String,
    /// ISO 4217 currency code.
    pub code: String,
    pub amount_1000: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    pub fallback_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogAction {
    pub thumbnail_product_retailer_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub product_retailer_id: String,
    pub catalog_id: String,
}

/// Body parameters allowed on a product carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselBodyParameter {
    Text { text: String },
    Currency { currency: Currency },
    DateTime { date_time: DateTime },
}

impl From<CarouselBodyParameter> for TemplateParameter {
    fn from(value: CarouselBodyParameter) -> Self {
        match value {
            CarouselBodyParameter::Text { text } => TemplateParameter::Text { text },
            CarouselBodyParameter::Currency { currency } => {
                TemplateParameter::Currency { currency }
            }
            CarouselBodyParameter::DateTime { date_time } => {
                TemplateParameter::DateTime { date_time }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parameters_serialize_with_api_type_tag() {
        assert_eq!(
            serde_json::to_value(TemplateParameter::text("Ana")).unwrap(),
            json!({"type": "text", "text": "Ana"})
        );
        assert_eq!(
            serde_json::to_value(TemplateParameter::currency("$12.99", "USD", 12990)).unwrap(),
            json!({
                "type": "currency",
                "currency": {"fallback_value": "$12.99", "code": "USD", "amount_1000": 12990}
            })
        );
        assert_eq!(
            serde_json::to_value(TemplateParameter::date_time("May 1st")).unwrap(),
            json!({"type": "date_time", "date_time": {"fallback_value": "May 1st"}})
        );
        assert_eq!(
            serde_json::to_value(TemplateParameter::image(MediaLink::id("77"))).unwrap(),
            json!({"type": "image", "image": {"id": "77"}})
        );
    }
}
