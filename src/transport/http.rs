use super::{Transport, TransportError};
use crate::config::ClientConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Proxy;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// reqwest-backed [`Transport`] for the Graph API.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    headers: HashMap<String, String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let headers = config.headers();
        let mut default_headers = HeaderMap::new();
        for (k, v) in &headers {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|e| Error::configuration(format!("Invalid header name {}: {}", k, e)))?;
            let value = HeaderValue::from_str(v)
                .map_err(|e| Error::configuration(format!("Invalid value for header {}: {}", k, e)))?;
            default_headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .pool_max_idle_per_host(16);

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::configuration(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn decode(text: String) -> Value {
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => Value::String(text),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, path: &str, body: &Value) -> std::result::Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        // Raw bytes so the merged `content-type` default is what goes out.
        let payload = serde_json::to_vec(body).map_err(|e| TransportError::Other(e.to_string()))?;
        let response = self.client.post(&url).body(payload).send().await?;
        let status = response.status();
        let text = response.text().await?;
        let decoded = Self::decode(text);

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: decoded,
            });
        }
        Ok(decoded)
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_json_bodies_become_strings() {
        assert_eq!(
            HttpTransport::decode("<html>oops</html>".into()),
            Value::String("<html>oops</html>".into())
        );
        assert_eq!(
            HttpTransport::decode(r#"{"ok":true}"#.into()),
            serde_json::json!({"ok": true})
        );
    }
}
