//! One method per message family, all routed through [`WhatsAppClient::send`].

use super::core::WhatsAppClient;
use crate::types::{
    CarouselTemplate, CatalogTemplate, InteractiveButtons, InteractiveList, Language, Location,
    MediaReference, OutboundMessage, ProductCarouselTemplate, ResponseOutcome, TemplateComponents,
    TemplateMessage, TextMessage,
};

impl WhatsAppClient {
    /// Text message with link previews enabled.
    pub async fn text(&self, to: &str, body: impl Into<String>) -> ResponseOutcome {
        self.send(to, &OutboundMessage::Text(TextMessage::new(body)))
            .await
    }

    pub async fn text_with_preview(
        &self,
        to: &str,
        body: impl Into<String>,
        preview_url: bool,
    ) -> ResponseOutcome {
        let message = TextMessage::new(body).with_preview_url(preview_url);
        self.send(to, &OutboundMessage::Text(message)).await
    }

    pub async fn image(&self, to: &str, media: MediaReference) -> ResponseOutcome {
        self.send(to, &OutboundMessage::Image(media)).await
    }

    pub async fn video(&self, to: &str, media: MediaReference) -> ResponseOutcome {
        self.send(to, &OutboundMessage::Video(media)).await
    }

    pub async fn template(
        &self,
        to: &str,
        name: impl Into<String>,
        language: impl Into<Language>,
        components: Option<TemplateComponents>,
    ) -> ResponseOutcome {
        let mut template = TemplateMessage::new(name, language);
        template.components = components;
        self.send(to, &OutboundMessage::Template(template)).await
    }

    pub async fn media_carousel(&self, to: &str, template: CarouselTemplate) -> ResponseOutcome {
        self.send(to, &OutboundMessage::MediaCarousel(template))
            .await
    }

    pub async fn product_carousel(
        &self,
        to: &str,
        template: ProductCarouselTemplate,
    ) -> ResponseOutcome {
        self.send(to, &OutboundMessage::ProductCarousel(template))
            .await
    }

    pub async fn catalog(&self, to: &str, template: CatalogTemplate) -> ResponseOutcome {
        self.send(to, &OutboundMessage::Catalog(template)).await
    }

    pub async fn interactive_buttons(
        &self,
        to: &str,
        message: InteractiveButtons,
    ) -> ResponseOutcome {
        self.send(to, &OutboundMessage::InteractiveButtons(message))
            .await
    }

    pub async fn interactive_list(&self, to: &str, message: InteractiveList) -> ResponseOutcome {
        self.send(to, &OutboundMessage::InteractiveList(message))
            .await
    }

    pub async fn location(&self, to: &str, location: Location) -> ResponseOutcome {
        self.send(to, &OutboundMessage::Location(location)).await
    }
}
