use crate::compose::{build_envelope, MessageEnvelope};
use crate::config::messages_path;
use crate::response::{classify, fold};
use crate::transport::Transport;
use crate::types::{MessageResponse, OutboundMessage, ResponseOutcome};
use crate::Result;
use futures::StreamExt;
use std::sync::Arc;
use tracing::{debug, info, Instrument};
use uuid::Uuid;

/// Default number of sends in flight during [`WhatsAppClient::send_batch`].
pub const DEFAULT_BATCH_CONCURRENCY: usize = 8;

/// Sends messages for one business phone number.
///
/// Every send resolves to a [`ResponseOutcome`]; nothing is raised past this
/// type. The client holds no per-call state and can be shared across tasks.
#[derive(Clone)]
pub struct WhatsAppClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) phone_number_id: String,
}

/// One entry of a batch send.
#[derive(Debug, Clone)]
pub struct BatchSend {
    pub to: String,
    pub message: OutboundMessage,
}

impl BatchSend {
    pub fn new(to: impl Into<String>, message: OutboundMessage) -> Self {
        Self {
            to: to.into(),
            message,
        }
    }
}

impl WhatsAppClient {
    pub fn builder() -> crate::client::builder::WhatsAppClientBuilder {
        crate::client::builder::WhatsAppClientBuilder::new()
    }

    /// Build a client around an existing transport.
    pub fn new(transport: Arc<dyn Transport>, phone_number_id: impl Into<String>) -> Self {
        Self {
            transport,
            phone_number_id: phone_number_id.into(),
        }
    }

    pub fn phone_number_id(&self) -> &str {
        &self.phone_number_id
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Build the envelope for `message` and send it to `to`.
    pub async fn send(&self, to: &str, message: &OutboundMessage) -> ResponseOutcome {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("whatsapp_send", %request_id, kind = message.kind());
        async {
            let result = match build_envelope(to, message) {
                Ok(envelope) => self.deliver(&envelope).await,
                Err(err) => Err(err),
            };
            fold(result)
        }
        .instrument(span)
        .await
    }

    /// Send an already-built envelope.
    pub async fn send_envelope(&self, envelope: &MessageEnvelope) -> ResponseOutcome {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("whatsapp_send", %request_id, kind = envelope.kind());
        async { fold(self.deliver(envelope).await) }
            .instrument(span)
            .await
    }

    async fn deliver(&self, envelope: &MessageEnvelope) -> Result<MessageResponse> {
        let body = envelope.to_value()?;
        let path = messages_path(&self.phone_number_id);
        debug!(%path, to = %envelope.to, "posting message");

        let raw = self.transport.post(&path, &body).await?;
        let response = classify(&raw)?;

        info!(
            ids = ?response.messages.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            "message accepted"
        );
        Ok(response)
    }

    /// Send several messages concurrently.
    ///
    /// Outcomes are returned in input order; each send is independent.
    pub async fn send_batch(
        &self,
        requests: Vec<BatchSend>,
        concurrency_limit: Option<usize>,
    ) -> Vec<ResponseOutcome> {
        if requests.is_empty() {
            return Vec::new();
        }
        let limit = concurrency_limit
            .unwrap_or(DEFAULT_BATCH_CONCURRENCY)
            .max(1);

        futures::stream::iter(requests)
            .map(|req| async move { self.send(&req.to, &req.message).await })
            .buffered(limit)
            .collect()
            .await
    }
}

impl std::fmt::Debug for WhatsAppClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppClient")
            .field("phone_number_id", &self.phone_number_id)
            .finish_non_exhaustive()
    }
}
