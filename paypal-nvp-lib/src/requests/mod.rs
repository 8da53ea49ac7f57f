//! Express Checkout API operations.
//!
//! Every operation builds its request fields eagerly: constructors and
//! setters validate on the spot, so a value that exists can always be sent.
//! The response is stored back on the same value once the round-trip
//! completes.

use std::fmt;
use std::str::FromStr;

use crate::fragment::Fragment;
use crate::validate::check_exact_len;
use crate::{NvpError, Result};

mod do_express_checkout_payment;
mod get_balance;
mod get_express_checkout_details;
mod set_express_checkout;

pub use do_express_checkout_payment::DoExpressCheckoutPayment;
pub use get_balance::GetBalance;
pub use get_express_checkout_details::GetExpressCheckoutDetails;
pub use set_express_checkout::SetExpressCheckout;

/// Checkout tokens are always this long.
pub const TOKEN_LEN: usize = 20;

/// Payer ids are always this long.
pub const PAYER_ID_LEN: usize = 13;

/// An API operation exchanged with the gateway.
///
/// Both accessors return snapshots. Before a response has been stored,
/// [`nvp_response`](Request::nvp_response) returns an empty mapping.
pub trait Request {
    /// Fields of the outbound message, `METHOD` included.
    fn nvp_request(&self) -> Fragment;

    /// Store the decoded gateway response, replacing any earlier one.
    fn set_nvp_response(&mut self, response: Fragment);

    /// Decoded gateway response.
    fn nvp_response(&self) -> Fragment;
}

pub(crate) fn check_token(token: &str) -> Result<()> {
    check_exact_len("TOKEN", token, TOKEN_LEN)
}

pub(crate) fn check_payer_id(payer_id: &str) -> Result<()> {
    check_exact_len("PAYERID", payer_id, PAYER_ID_LEN)
}

/// How the payment is settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentAction {
    /// Final sale.
    Sale,
    /// Authorization to be captured later.
    Authorization,
    /// Order to be authorized and captured later.
    Order,
}

impl PaymentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "Sale",
            Self::Authorization => "Authorization",
            Self::Order => "Order",
        }
    }
}

impl fmt::Display for PaymentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentAction {
    type Err = NvpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Sale" => Ok(Self::Sale),
            "Authorization" => Ok(Self::Authorization),
            "Order" => Ok(Self::Order),
            other => Err(NvpError::validation(
                "PAYMENTACTION",
                format!("{:?} must be Sale, Authorization or Order", other),
            )),
        }
    }
}

/// Whether a PayPal account is needed to pay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionType {
    /// Buyer does not need a PayPal account.
    Sole,
    /// Buyer must have a PayPal account.
    Mark,
}

impl SolutionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sole => "Sole",
            Self::Mark => "Mark",
        }
    }
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolutionType {
    type Err = NvpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Sole" => Ok(Self::Sole),
            "Mark" => Ok(Self::Mark),
            other => Err(NvpError::validation(
                "SOLUTIONTYPE",
                format!("{:?} must be Sole or Mark", other),
            )),
        }
    }
}

/// Page shown first when the buyer lands on PayPal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingPage {
    /// Non-PayPal account (billing) page.
    Billing,
    /// PayPal account login page.
    Login,
}

impl LandingPage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Billing => "Billing",
            Self::Login => "Login",
        }
    }
}

impl fmt::Display for LandingPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandingPage {
    type Err = NvpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Billing" => Ok(Self::Billing),
            "Login" => Ok(Self::Login),
            other => Err(NvpError::validation(
                "LANDINGPAGE",
                format!("{:?} must be Billing or Login", other),
            )),
        }
    }
}

/// Type of channel the checkout originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelType {
    /// Non-auction seller.
    Merchant,
    /// eBay auction.
    EbayItem,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merchant => "Merchant",
            Self::EbayItem => "eBayItem",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = NvpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Merchant" => Ok(Self::Merchant),
            "eBayItem" => Ok(Self::EbayItem),
            other => Err(NvpError::validation(
                "CHANNELTYPE",
                format!("{:?} must be Merchant or eBayItem", other),
            )),
        }
    }
}
