//! # wa-cloud-messages
//!
//! WhatsApp Cloud API 消息构建与响应归一化库：强类型消息 → 精确的 JSON 信封，任意 HTTP 结果 → 统一结果值。
//!
//! Typed message composition and response normalization for the WhatsApp
//! Cloud (Graph) messaging API.
//!
//! ## Overview
//!
//! Outbound messages are described with strongly-typed values (text, media,
//! template, carousel, catalog, interactive, location) and turned into the exact
//! envelope the messages endpoint expects. Whatever comes back (a success body,
//! an API error body, or a transport failure) is folded into a single
//! [`ResponseOutcome`] that callers match on.
//!
//! ## Core Pieces
//!
//! - **Component assembly**: template, media carousel, product carousel and
//!   catalog `components` arrays, see [`compose::components`]
//! - **Envelope building**: [`compose::build_envelope`]
//! - **Response classification**: [`response::classify`]
//! - **Error normalization**: [`Error::serialize_error`] and [`response::fold`]
//! - **Client facade**: [`WhatsAppClient`] over an injectable [`transport::Transport`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wa_cloud_messages::{ResponseOutcome, WhatsAppClientBuilder};
//!
//! # async fn run() -> wa_cloud_messages::Result<()> {
//! let client = WhatsAppClientBuilder::new()
//!     .access_token("EAAG...")
//!     .phone_number_id("1234567890")
//!     .version("v21.0")
//!     .build()?;
//!
//! match client.text("15551234567", "hi").await {
//!     ResponseOutcome::Success(resp) => println!("sent {}", resp.messages[0].id),
//!     ResponseOutcome::Error { error } => {
//!         for e in error {
//!             eprintln!("{}", e.message);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Message inputs, template parameters, response outcome |
//! | [`compose`] | Component assembly and envelope building |
//! | [`response`] | Success-body classification and error folding |
//! | [`client`] | Client facade and builder |
//! | [`transport`] | Transport trait and the reqwest implementation |
//! | [`config`] | API version, credentials and headers |
//! | [`error_code`] | Standard error codes with retry hints |

pub mod client;
pub mod compose;
pub mod config;
pub mod error_code;
pub mod response;
pub mod transport;
pub mod types;

pub use client::{BatchSend, WhatsAppClient, WhatsAppClientBuilder};
pub use compose::{build_envelope, MessageEnvelope};
pub use types::{MessageResponse, OutboundMessage, ResponseOutcome};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
