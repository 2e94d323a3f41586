//! # Types Module
//!
//! Strongly-typed inputs for every outbound message family and the normalized
//! response type.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`media`] | By-id / by-URL media references and their wire form |
//! | [`parameter`] | Template parameters (text, media, currency, date_time, ...) |
//! | [`template`] | Template, carousel and catalog inputs |
//! | [`message`] | [`OutboundMessage`] and the text/interactive/location inputs |
//! | [`response`] | [`ResponseOutcome`] and its success/error payloads |
//!
//! ## Example
//!
//! ```rust
//! use wa_cloud_messages::types::{
//!     HeaderParameter, MediaLink, QuickReply, TemplateComponents, TemplateMessage,
//!     TemplateParameter,
//! };
//!
//! let template = TemplateMessage::new("order_update", "en_US").with_components(
//!     TemplateComponents::new()
//!         .header(HeaderParameter::Image { image: MediaLink::link("https://cdn.test/a.png") })
//!         .body(vec![TemplateParameter::text("Ana")])
//!         .quick_reply(QuickReply::new(0, "TRACK")),
//! );
//! assert_eq!(template.language.code, "en_US");
//! ```

pub mod media;
pub mod message;
pub mod parameter;
pub mod response;
pub mod template;

pub use media::{MediaLink, MediaReference, ResolvedMedia};
pub use message::{
    InteractiveButtons, InteractiveList, ListRow, ListSection, Location, OutboundMessage,
    ReplyButton, TextMessage,
};
pub use parameter::{CarouselBodyParameter, TemplateParameter};
pub use response::{Contact, ErrorEntry, MessageResponse, ResponseOutcome, SentMessage};
pub use template::{
    CardButton, CardHeader, CarouselCard, CarouselTemplate, CatalogTemplate, HeaderParameter,
    Language, ProductCard, ProductCarouselTemplate, QuickReply, TemplateComponents,
    TemplateMessage,
};
