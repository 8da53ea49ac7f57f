//! HTTP POST transport.
//!
//! # Feature Flags
//!
//! Real requests need the `http-transport` feature. Without it every call
//! returns an `Unimplemented` error.
//!
//! ```toml
//! [dependencies]
//! paypal-nvp-lib = { version = "0.1", features = ["http-transport"] }
//! ```

use async_trait::async_trait;
#[cfg(feature = "http-transport")]
use std::time::Duration;

use super::Transport;
use crate::config::GatewayConfig;
#[cfg(feature = "http-transport")]
use crate::NvpError;
use crate::Result;

/// Sends messages with an HTTP POST over `reqwest`.
pub struct HttpPostTransport {
    timeout_secs: u64,
    #[cfg(feature = "http-transport")]
    client: reqwest::Client,
}

impl HttpPostTransport {
    /// Create a transport that gives up after `timeout_secs`.
    #[cfg(feature = "http-transport")]
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NvpError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            timeout_secs,
            client,
        })
    }

    /// Create a transport (stub when feature disabled).
    #[cfg(not(feature = "http-transport"))]
    pub fn new(timeout_secs: u64) -> Result<Self> {
        Ok(Self { timeout_secs })
    }

    /// Create a transport using the timeout of `config`.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Self::new(config.timeout_secs)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    #[cfg(feature = "http-transport")]
    fn map_reqwest_error(&self, url: &str, e: reqwest::Error) -> NvpError {
        if e.is_timeout() {
            NvpError::ConnectionTimeout {
                operation: "NVP POST".to_string(),
                timeout_ms: self.timeout_secs * 1000,
            }
        } else if e.is_connect() {
            NvpError::ConnectionFailed {
                target: url.to_string(),
                reason: e.to_string(),
            }
        } else {
            NvpError::Transport(format!("NVP request failed: {}", e))
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for HttpPostTransport {
    #[cfg(feature = "http-transport")]
    async fn post(&self, url: &str, body: &str, headers: &[(&str, &str)]) -> Result<String> {
        let mut request = self.client.post(url).body(body.to_string());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(url, e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "NVP response received");

        let text = response
            .text()
            .await
            .map_err(|e| NvpError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(NvpError::Transport(format!(
                "NVP request failed ({}): {}",
                status.as_u16(),
                text
            )));
        }

        Ok(text)
    }

    #[cfg(not(feature = "http-transport"))]
    async fn post(&self, _url: &str, _body: &str, _headers: &[(&str, &str)]) -> Result<String> {
        Err(crate::NvpError::Unimplemented(
            "HTTP transport not compiled - enable the 'http-transport' feature",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_from_config() {
        let config = GatewayConfig::default().with_timeout(3);
        let transport = HttpPostTransport::from_config(&config).unwrap();
        assert_eq!(transport.timeout_secs(), 3);
    }

    #[cfg(not(feature = "http-transport"))]
    #[tokio::test]
    async fn test_stub_reports_unimplemented() {
        let transport = HttpPostTransport::new(10).unwrap();
        let err = transport
            .post("https://api-3t.sandbox.paypal.com/nvp", "", &[])
            .await
            .unwrap_err();
        assert_eq!(err.code(), crate::NvpErrorCode::Unimplemented);
    }
}
