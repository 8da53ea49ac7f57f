//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use paypal_nvp_lib::prelude::*;
//! ```

// Error handling
pub use crate::errors::{NvpError, NvpErrorCode};
pub use crate::Result;

// Messages
pub use crate::fragment::{Fragment, NvpFields};
pub use crate::profile::{BaseProfile, Profile};
pub use crate::requests::{
    ChannelType, DoExpressCheckoutPayment, GetBalance, GetExpressCheckoutDetails, LandingPage,
    PaymentAction, Request, SetExpressCheckout, SolutionType,
};

// Field groups
pub use crate::fields::{
    Address, BillingAgreement, BillingPaymentType, Payment, PaymentItem, ShipToAddress,
    ShippingCalculationMode, ShippingOptions, UserSelectedOptions,
};

// Sending
pub use crate::client::NvpClient;
pub use crate::config::GatewayConfig;
pub use crate::response::{ack, gateway_errors, Ack, GatewayError};
pub use crate::transport::{HttpPostTransport, Transport};
