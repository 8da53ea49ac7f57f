//! Delivery of encoded messages to the gateway.
//!
//! [`NvpClient`](crate::client::NvpClient) only needs a single POST per
//! call, so any HTTP stack (or a test double) can sit behind [`Transport`].

use async_trait::async_trait;

use crate::Result;

mod http;

pub use http::HttpPostTransport;

/// Headers sent with every NVP message.
pub const FORM_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/x-www-form-urlencoded"),
    ("Accept", "text/plain"),
];

/// POSTs a message body and returns the raw response body.
///
/// Timeouts and cancellation are the implementation's business.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport {
    async fn post(&self, url: &str, body: &str, headers: &[(&str, &str)]) -> Result<String>;
}
