//! Client configuration: API version, credentials and request headers.

use crate::{Error, ErrorContext, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_API_VERSION: &str = "v21.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v\d+(\.\d+)?$").expect("version pattern is valid"));

/// Graph API version such as `v21.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if !VERSION_PATTERN.is_match(raw) {
            return Err(Error::configuration_with_context(
                format!("Invalid API version '{}', expected v<major>[.<minor>]", raw),
                ErrorContext::new()
                    .with_field_path("version")
                    .with_source("client_config"),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(DEFAULT_API_VERSION.to_string())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authorization scheme placed before the access token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenType {
    #[default]
    Bearer,
    OAuth,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Bearer => f.write_str("Bearer"),
            TokenType::OAuth => f.write_str("OAuth"),
        }
    }
}

/// Default headers followed by caller overrides.
///
/// Names are lowercased so an override replaces the default regardless of
/// the case it was given in.
pub fn auth_headers(
    access_token: &str,
    token_type: TokenType,
    extra: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    headers.insert(
        "authorization".to_string(),
        format!("{} {}", token_type, access_token),
    );
    for (k, v) in extra {
        headers.insert(k.to_ascii_lowercase(), v.clone());
    }
    headers
}

/// Resolved settings for one client.
#[derive(Clone)]
pub struct ClientConfig {
    pub access_token: String,
    pub version: ApiVersion,
    pub phone_number_id: String,
    pub token_type: TokenType,
    pub extra_headers: HashMap<String, String>,
    /// Replaces `https://graph.facebook.com/{version}` entirely (mock servers, proxies).
    pub base_url_override: Option<String>,
    pub timeout: Duration,
    pub proxy_url: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("version", &self.version)
            .field("phone_number_id", &self.phone_number_id)
            .field("token_type", &self.token_type)
            .field("base_url_override", &self.base_url_override)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}/{}", DEFAULT_GRAPH_URL, self.version),
        }
    }

    pub fn headers(&self) -> HashMap<String, String> {
        auth_headers(&self.access_token, self.token_type, &self.extra_headers)
    }
}

/// Path of the messages endpoint for a phone number.
pub fn messages_path(phone_number_id: &str) -> String {
    format!("/{}/messages", phone_number_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig {
            access_token: "secret".into(),
            version: ApiVersion::parse("v19.0").unwrap(),
            phone_number_id: "1234".into(),
            token_type: TokenType::Bearer,
            extra_headers: HashMap::new(),
            base_url_override: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy_url: None,
        }
    }

    #[test]
    fn version_format_is_checked() {
        assert!(ApiVersion::parse("v21.0").is_ok());
        assert!(ApiVersion::parse("v3").is_ok());
        assert!(ApiVersion::parse("21.0").is_err());
        assert!(ApiVersion::parse("vX").is_err());
        assert_eq!(ApiVersion::default().as_str(), DEFAULT_API_VERSION);
    }

    #[test]
    fn base_url_includes_version_unless_overridden() {
        let mut cfg = config();
        assert_eq!(cfg.base_url(), "https://graph.facebook.com/v19.0");
        cfg.base_url_override = Some("http://127.0.0.1:9000/".into());
        assert_eq!(cfg.base_url(), "http://127.0.0.1:9000");
        assert_eq!(messages_path(&cfg.phone_number_id), "/1234/messages");
    }

    #[test]
    fn caller_headers_override_defaults() {
        let mut extra = HashMap::new();
        extra.insert("X-Trace".to_string(), "abc".to_string());
        extra.insert("Content-Type".to_string(), "application/json; charset=utf-8".to_string());
        let headers = auth_headers("tok", TokenType::OAuth, &extra);
        assert_eq!(headers["authorization"], "OAuth tok");
        assert_eq!(headers["x-trace"], "abc");
        assert_eq!(headers["content-type"], "application/json; charset=utf-8");
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn override_in_other_case_replaces_default() {
        let mut extra = HashMap::new();
        extra.insert("AUTHORIZATION".to_string(), "Bearer other".to_string());
        let headers = auth_headers("tok", TokenType::Bearer, &extra);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["authorization"], "Bearer other");
    }

    #[test]
    fn debug_output_redacts_token() {
        let text = format!("{:?}", config());
        assert!(!text.contains("secret"));
        assert!(text.contains("<redacted>"));
    }
}
