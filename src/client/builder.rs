use crate::client::core::WhatsAppClient;
use crate::config::{ApiVersion, ClientConfig, TokenType, DEFAULT_TIMEOUT_SECS};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`WhatsAppClient`].
///
/// Unset values fall back to the environment:
/// - `WHATSAPP_ACCESS_TOKEN`
/// - `WHATSAPP_API_VERSION` (default `v21.0`)
/// - `WHATSAPP_PHONE_NUMBER_ID`
/// - `WHATSAPP_HTTP_TIMEOUT_SECS` (default 30)
/// - `WHATSAPP_BASE_URL`
/// - `WHATSAPP_PROXY_URL`
pub struct WhatsAppClientBuilder {
    access_token: Option<String>,
    version: Option<String>,
    phone_number_id: Option<String>,
    token_type: TokenType,
    extra_headers: HashMap<String, String>,
    base_url_override: Option<String>,
    timeout_secs: Option<u64>,
    proxy_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn missing(field: &str, env: &str) -> Error {
    Error::configuration_with_context(
        format!("{} must be set (or {} provided)", field, env),
        ErrorContext::new()
            .with_field_path(field)
            .with_source("client_builder"),
    )
}

impl WhatsAppClientBuilder {
    pub fn new() -> Self {
        Self {
            access_token: None,
            version: None,
            phone_number_id: None,
            token_type: TokenType::default(),
            extra_headers: HashMap::new(),
            base_url_override: None,
            timeout_secs: None,
            proxy_url: None,
            transport: None,
        }
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// API version in the `v<major>[.<minor>]` form.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn phone_number_id(mut self, id: impl Into<String>) -> Self {
        self.phone_number_id = Some(id.into());
        self
    }

    pub fn token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Extra header; overrides the defaults on name clash.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Replace the versioned Graph API base URL (primarily for mock servers).
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs.max(1));
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Use a custom transport; credentials and URL settings are then ignored.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    fn validate_base_url(raw: &str) -> Result<String> {
        let parsed = url::Url::parse(raw).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL '{}': {}", raw, e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_source("client_builder"),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("Base URL must be http or https, got '{}'", parsed.scheme()),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_source("client_builder"),
            ));
        }
        Ok(raw.to_string())
    }

    /// Resolve the configuration without building a transport.
    pub fn config(&self) -> Result<ClientConfig> {
        let phone_number_id = self
            .phone_number_id
            .clone()
            .or_else(|| env_var("WHATSAPP_PHONE_NUMBER_ID"))
            .ok_or_else(|| missing("phone_number_id", "WHATSAPP_PHONE_NUMBER_ID"))?;
        let access_token = self
            .access_token
            .clone()
            .or_else(|| env_var("WHATSAPP_ACCESS_TOKEN"))
            .ok_or_else(|| missing("access_token", "WHATSAPP_ACCESS_TOKEN"))?;
        let version = match self.version.clone().or_else(|| env_var("WHATSAPP_API_VERSION")) {
            Some(raw) => ApiVersion::parse(&raw)?,
            None => ApiVersion::default(),
        };
        let base_url_override = self
            .base_url_override
            .clone()
            .or_else(|| env_var("WHATSAPP_BASE_URL"))
            .map(|raw| Self::validate_base_url(&raw))
            .transpose()?;
        let timeout_secs = self
            .timeout_secs
            .or_else(|| env_var("WHATSAPP_HTTP_TIMEOUT_SECS").and_then(|s| s.parse().ok()))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(ClientConfig {
            access_token,
            version,
            phone_number_id,
            token_type: self.token_type,
            extra_headers: self.extra_headers.clone(),
            base_url_override,
            timeout: Duration::from_secs(timeout_secs),
            proxy_url: self
                .proxy_url
                .clone()
                .or_else(|| env_var("WHATSAPP_PROXY_URL")),
        })
    }

    /// Build the client.
    pub fn build(self) -> Result<WhatsAppClient> {
        if let Some(transport) = self.transport.clone() {
            let phone_number_id = self
                .phone_number_id
                .or_else(|| env_var("WHATSAPP_PHONE_NUMBER_ID"))
                .ok_or_else(|| missing("phone_number_id", "WHATSAPP_PHONE_NUMBER_ID"))?;
            return Ok(WhatsAppClient::new(transport, phone_number_id));
        }

        let config = self.config()?;
        tracing::debug!(?config, "building WhatsApp client");
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(WhatsAppClient::new(transport, config.phone_number_id))
    }
}

impl Default for WhatsAppClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
