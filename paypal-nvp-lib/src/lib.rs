//! PayPal NVP library.
//!
//! Builds, validates and decodes Name-Value Pair messages for the Express
//! Checkout flow (`SetExpressCheckout` -> `GetExpressCheckoutDetails` ->
//! `DoExpressCheckoutPayment`) and `GetBalance`.
//!
//! Every value is validated when it is set, so a request that exists can be
//! sent. Field groups hand out copies of their state; nothing is shared
//! between requests, and the network sits behind the [`Transport`] trait.
//!
//! # Example
//!
//! ```
//! use paypal_nvp_lib::codec::encode_message;
//! use paypal_nvp_lib::fields::{Payment, PaymentItem};
//! use paypal_nvp_lib::profile::{BaseProfile, Profile};
//! use paypal_nvp_lib::requests::{Request, SetExpressCheckout};
//!
//! let mut mug = PaymentItem::new();
//! mug.set_name("Coffee mug").unwrap();
//! mug.set_amount("8.00").unwrap();
//!
//! let payment = Payment::from_items(vec![mug]);
//! let checkout = SetExpressCheckout::new(
//!     &payment,
//!     "https://shop.example.com/return",
//!     "https://shop.example.com/cancel",
//! )
//! .unwrap();
//!
//! let profile = BaseProfile::new("seller_api1.example.com", "secret");
//! let body = encode_message(&profile.nvp_fragment(), &checkout.nvp_request(), "61.0");
//!
//! assert!(body.starts_with("PWD=secret&USER=seller_api1.example.com&"));
//! assert!(body.contains("L_NAME0=Coffee%20mug"));
//! assert!(body.ends_with("&VERSION=61.0"));
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod errors;
pub mod fields;
pub mod format;
pub mod fragment;
pub mod prelude;
pub mod profile;
pub mod requests;
pub mod response;
pub mod transport;
pub mod validate;

/// Test utilities for NVP round-trips.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::NvpClient;
pub use config::{gateway_config_from_env, gateway_config_from_lookup, GatewayConfig};
pub use errors::{NvpError, NvpErrorCode};
pub use fragment::{Fragment, NvpFields};
pub use profile::{profile_from_env, profile_from_lookup, BaseProfile, Profile};
pub use requests::Request;
pub use transport::{HttpPostTransport, Transport};

/// Common result alias for NVP operations.
pub type Result<T> = std::result::Result<T, NvpError>;
