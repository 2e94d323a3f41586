//! Outbound payload construction.
//!
//! [`components`] assembles template, carousel and catalog `components` arrays;
//! [`envelope`] wraps every message kind into the common envelope.

pub mod components;
pub mod envelope;

pub use components::{
    catalog_components, media_carousel_components, product_carousel_components,
    template_components, ButtonSubType, Card, Component,
};
pub use envelope::{build_envelope, InteractiveBody, MessageEnvelope, Payload, TemplateBody};
