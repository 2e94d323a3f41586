//! Client facade for the messages endpoint.
//!
//! Keep the public surface small: build a [`WhatsAppClient`], call a send
//! method, match on the returned [`ResponseOutcome`](crate::ResponseOutcome).

pub mod builder;
pub mod core;
mod messages;

pub use builder::WhatsAppClientBuilder;
pub use self::core::{BatchSend, WhatsAppClient, DEFAULT_BATCH_CONCURRENCY};
