//! Message round-trips with the gateway.
//!
//! [`NvpClient`] is the only piece that talks to a [`Transport`]: it
//! assembles the message, posts it, decodes the answer and stores it back
//! on the request. Transport failures are logged and leave the request
//! without a response; callers observe that through
//! [`NvpClient::redirect_url`] returning `None`.
//!
//! # Example
//!
//! ```rust,ignore
//! use paypal_nvp_lib::client::NvpClient;
//! use paypal_nvp_lib::config::GatewayConfig;
//! use paypal_nvp_lib::fields::Payment;
//! use paypal_nvp_lib::profile::BaseProfile;
//! use paypal_nvp_lib::requests::SetExpressCheckout;
//! use paypal_nvp_lib::transport::HttpPostTransport;
//!
//! let config = GatewayConfig::sandbox();
//! let transport = HttpPostTransport::from_config(&config)?;
//! let profile = BaseProfile::new("seller_api1.example.com", "secret").with_signature("sig");
//! let client = NvpClient::new(profile, config, transport);
//!
//! let payment = Payment::from_amount("15.50")?;
//! let mut checkout = SetExpressCheckout::new(&payment, "https://shop/ok", "https://shop/ko")?;
//!
//! if client.send(&mut checkout).await {
//!     if let Some(url) = client.redirect_url(&checkout) {
//!         println!("Send the buyer to {}", url);
//!     }
//! }
//! ```

use tracing::{debug, error, warn};

use crate::codec::{decode_response, encode_message};
use crate::config::GatewayConfig;
use crate::fragment::Fragment;
use crate::profile::Profile;
use crate::requests::Request;
use crate::response::{ack, Ack};
use crate::transport::{Transport, FORM_HEADERS};

const MASK: &str = "REDACTED";
const SECRET_FIELDS: [&str; 2] = ["PWD", "SIGNATURE"];

/// Sends requests on behalf of one merchant profile.
pub struct NvpClient<P, T> {
    profile: P,
    config: GatewayConfig,
    transport: T,
}

impl<P: Profile, T: Transport> NvpClient<P, T> {
    pub fn new(profile: P, config: GatewayConfig, transport: T) -> Self {
        Self {
            profile,
            config,
            transport,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Outbound message body for `request`, credentials included.
    pub fn encode_request<R: Request + ?Sized>(&self, request: &R) -> String {
        encode_message(
            &self.profile.nvp_fragment(),
            &request.nvp_request(),
            &self.config.version,
        )
    }

    /// Same as [`Self::encode_request`] with the password and signature
    /// masked, for display.
    pub fn preview_request<R: Request + ?Sized>(&self, request: &R) -> String {
        let mut credentials = self.profile.nvp_fragment();
        for key in SECRET_FIELDS {
            if let Some(value) = credentials.get_mut(key) {
                *value = MASK.to_string();
            }
        }
        encode_message(&credentials, &request.nvp_request(), &self.config.version)
    }

    /// Performs one round-trip and stores the decoded response on `request`.
    ///
    /// Returns whether a response was received. Transport errors are
    /// logged, never returned, and leave any earlier response in place.
    #[tracing::instrument(skip_all, fields(method = tracing::field::Empty))]
    pub async fn send<R: Request + ?Sized>(&self, request: &mut R) -> bool {
        let fields = request.nvp_request();
        if let Some(method) = fields.get("METHOD") {
            tracing::Span::current().record("method", method.as_str());
        }

        let body = encode_message(&self.profile.nvp_fragment(), &fields, &self.config.version);
        let url = self.config.endpoint_url();
        debug!(url = %url, bytes = body.len(), "Sending NVP request");

        let raw = match self.transport.post(&url, &body, &FORM_HEADERS).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, code = ?e.code(), "NVP transport failed");
                return false;
            }
        };

        if raw.trim().is_empty() {
            warn!("NVP response body was empty");
            return false;
        }

        let response = decode_response(&raw);
        match ack(&response) {
            Some(Ack::Success) => debug!(fields = response.len(), "NVP request acknowledged"),
            Some(other) => warn!(ack = %other, "NVP request not successful"),
            None => warn!("NVP response has no ACK"),
        }

        request.set_nvp_response(response);
        true
    }

    /// URL the buyer must visit to approve a checkout.
    ///
    /// Only a response with `ACK=Success` and a non-empty `TOKEN` yields
    /// a URL.
    pub fn redirect_url<R: Request + ?Sized>(&self, request: &R) -> Option<String> {
        redirect_url_for(&self.config, &request.nvp_response())
    }
}

/// Redirect URL for a decoded response under `config`.
pub fn redirect_url_for(config: &GatewayConfig, response: &Fragment) -> Option<String> {
    if response.get("ACK").map(String::as_str) != Some("Success") {
        return None;
    }

    let token = response.get("TOKEN").filter(|token| !token.is_empty())?;
    Some(format!(
        "{}?cmd=_express-checkout&token={}",
        config.checkout_base_url(),
        token
    ))
}
