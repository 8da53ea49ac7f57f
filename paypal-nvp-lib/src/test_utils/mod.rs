//! Test utilities for NVP round-trips.
//!
//! - [`RecordingTransport`]: in-memory [`Transport`] that records every
//!   message and replies from a script
//! - [`TestFixtures`]: well-formed tokens, payer ids and payments
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paypal_nvp_lib::test_utils::{RecordingTransport, TestFixtures};
//!
//! let transport = RecordingTransport::new();
//! transport.push_response(TestFixtures::checkout_success_body());
//! let client = NvpClient::new(TestFixtures::profile(), GatewayConfig::sandbox(), transport);
//! ```

mod fixtures;

pub use fixtures::TestFixtures;

use std::collections::VecDeque;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::codec::decode_response;
use crate::fragment::Fragment;
use crate::transport::Transport;
use crate::{NvpError, Result};

/// One message handed to [`RecordingTransport::post`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostedMessage {
    pub url: String,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

impl PostedMessage {
    /// The body decoded back into fields.
    pub fn fields(&self) -> Fragment {
        decode_response(&self.body)
    }
}

/// Transport that never touches the network.
///
/// Replies are consumed in order; once the script is exhausted every call
/// fails with a transport error.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    replies: RwLock<VecDeque<Result<String>>>,
    posted: RwLock<Vec<PostedMessage>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body.
    pub fn push_response(&self, body: impl Into<String>) {
        if let Ok(mut replies) = self.replies.write() {
            replies.push_back(Ok(body.into()));
        }
    }

    /// Queue a failure.
    pub fn push_error(&self, error: NvpError) {
        if let Ok(mut replies) = self.replies.write() {
            replies.push_back(Err(error));
        }
    }

    /// Every message posted so far.
    pub fn posted(&self) -> Vec<PostedMessage> {
        self.posted
            .read()
            .map(|posted| posted.clone())
            .unwrap_or_default()
    }

    /// The most recent message, if any.
    pub fn last_posted(&self) -> Option<PostedMessage> {
        self.posted().pop()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for RecordingTransport {
    async fn post(&self, url: &str, body: &str, headers: &[(&str, &str)]) -> Result<String> {
        if let Ok(mut posted) = self.posted.write() {
            posted.push(PostedMessage {
                url: url.to_string(),
                body: body.to_string(),
                headers: headers
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect(),
            });
        }

        self.replies
            .write()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .unwrap_or_else(|| Err(NvpError::Transport("no scripted reply".to_string())))
    }
}
