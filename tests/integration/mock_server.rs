//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;
use wa_cloud_messages::{WhatsAppClient, WhatsAppClientBuilder};

pub const PHONE_NUMBER_ID: &str = "106540352242922";
pub const MESSAGES_PATH: &str = "/106540352242922/messages";
pub const ACCESS_TOKEN: &str = "test-token";

pub const SUCCESS_BODY: &str = r#"{
  "messaging_product": "whatsapp",
  "contacts": [{"input": "15551234567", "wa_id": "15551234567"}],
  "messages": [{"id": "wamid.HBgLMTU1NTEyMzQ1NjcVAgARGBI", "message_status": "accepted"}]
}"#;

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Client pointed at the mock server through `base_url_override`.
    pub fn client(&self) -> WhatsAppClient {
        WhatsAppClientBuilder::new()
            .access_token(ACCESS_TOKEN)
            .phone_number_id(PHONE_NUMBER_ID)
            .base_url_override(&self.base_url)
            .timeout_secs(5)
            .build()
            .expect("client builds against mock server")
    }

    /// Client with one extra header on top of the defaults.
    pub fn client_with_header(&self, name: &str, value: &str) -> WhatsAppClient {
        WhatsAppClientBuilder::new()
            .access_token(ACCESS_TOKEN)
            .phone_number_id(PHONE_NUMBER_ID)
            .base_url_override(&self.base_url)
            .header(name, value)
            .build()
            .expect("client builds against mock server")
    }

    /// Mock the messages endpoint, requiring one header value.
    pub async fn mock_expecting_header(&self, name: &str, value: &str, hits: usize) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", MESSAGES_PATH)
            .match_header(name, value)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SUCCESS_BODY)
            .expect(hits)
            .create_async()
            .await
    }

    /// Mock the messages endpoint with a JSON response.
    pub async fn mock_json_response(&self, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", MESSAGES_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock the messages endpoint, matching a subset of the posted JSON.
    pub async fn mock_expecting_body(&self, expected: serde_json::Value) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", MESSAGES_PATH)
            .match_header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SUCCESS_BODY)
            .create_async()
            .await
    }

    /// Mock a success status with a non-JSON body.
    pub async fn mock_raw_response(&self, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", MESSAGES_PATH)
            .with_status(status)
            .with_header("content-type", "text/html")
            .with_body(body)
            .create_async()
            .await
    }

    /// A mock that must never be hit.
    pub async fn mock_untouched(&self) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", MESSAGES_PATH)
            .with_status(200)
            .with_body(SUCCESS_BODY)
            .expect(0)
            .create_async()
            .await
    }
}
