//! Well-formed sample values.

use crate::fields::{Payment, PaymentItem};
use crate::profile::BaseProfile;
use crate::Result;

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// A 20 character checkout token.
    pub const TOKEN: &'static str = "EC-12345678901234567";

    /// A 13 character payer id.
    pub const PAYER_ID: &'static str = "ABCDEFGHIJKLM";

    pub const RETURN_URL: &'static str = "https://shop.example.com/checkout/return";

    pub const CANCEL_URL: &'static str = "https://shop.example.com/checkout/cancel";

    /// Sandbox-style credentials with a signature.
    pub fn profile() -> BaseProfile {
        BaseProfile::new("seller_api1.example.com", "1234567890")
            .with_signature("AFcWxV21C7fd0v3bYYYRCpSSRl31A1b2C3d4E5f6G7h8I9j0K1l2M3n4")
    }

    /// Item with a name and a unit price.
    pub fn item(name: &str, amount: &str) -> Result<PaymentItem> {
        let mut item = PaymentItem::new();
        item.set_name(name)?;
        item.set_amount(amount)?;
        Ok(item)
    }

    /// Two items worth 8.00 and 24.00.
    pub fn two_item_payment() -> Result<Payment> {
        Ok(Payment::from_items(vec![
            Self::item("Coffee mug", "8.00")?,
            Self::item("Poster", "24.00")?,
        ]))
    }

    /// Encoded body of a successful `SetExpressCheckout`.
    pub fn checkout_success_body() -> String {
        format!(
            "TOKEN={}&TIMESTAMP=2011%2d05%2d01T10%3a00%3a00Z&CORRELATIONID=4f2a1c3b5d6e7&ACK=Success&VERSION=61%2e0&BUILD=1824201",
            Self::TOKEN.replace('-', "%2d")
        )
    }

    /// Encoded body of a failed call.
    pub fn failure_body() -> String {
        "TIMESTAMP=2011%2d05%2d01T10%3a00%3a00Z&ACK=Failure&L_ERRORCODE0=10002&L_SHORTMESSAGE0=Security%20error&L_LONGMESSAGE0=Security%20header%20is%20not%20valid&L_SEVERITYCODE0=Error".to_string()
    }
}
