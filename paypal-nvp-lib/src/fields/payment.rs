//! Payment details and total aggregation.
//!
//! A [`Payment`] either carries an explicit `AMT` or derives it from its
//! items every time the fragment is read. Derived totals are summed in
//! whole cents so that any number of items adds up exactly.

use crate::format::{format_cents, parse_cents};
use crate::fragment::{append_indexed, insert, Fragment, NvpFields};
use crate::validate::{check_amount, check_exact_len, check_max_len};
use crate::Result;

use super::PaymentItem;

const CURRENCY_LEN: usize = 3;
const DESCRIPTION_MAX: usize = 127;
const CUSTOM_MAX: usize = 256;
const INVOICE_MAX: usize = 127;
const BUTTON_SOURCE_MAX: usize = 32;
const NOTIFY_URL_MAX: usize = 2048;
const NOTE_MAX: usize = 255;

/// Payment details merged into `SetExpressCheckout` and
/// `DoExpressCheckoutPayment`.
///
/// # Example
///
/// ```
/// use paypal_nvp_lib::fields::{Payment, PaymentItem};
/// use paypal_nvp_lib::fragment::NvpFields;
///
/// let mut mug = PaymentItem::new();
/// mug.set_amount("8.00").unwrap();
/// let mut poster = PaymentItem::new();
/// poster.set_amount("24.00").unwrap();
///
/// let mut payment = Payment::from_items(vec![mug, poster]);
/// payment.set_handling_amount("2.00").unwrap();
///
/// let fields = payment.nvp_fragment();
/// assert_eq!(fields["ITEMAMT"], "32.00");
/// assert_eq!(fields["AMT"], "34.00");
/// assert_eq!(fields["CURRENCYCODE"], "EUR");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payment {
    fields: Fragment,
    items: Vec<PaymentItem>,
}

impl Payment {
    /// Currency used until [`Self::set_currency`] is called.
    pub const DEFAULT_CURRENCY: &'static str = "EUR";

    /// Create a payment from an optional explicit total and a list of items.
    ///
    /// An explicit `amount` is never overwritten by aggregation, even when
    /// items are present; the items are still listed.
    pub fn new(amount: Option<&str>, items: Vec<PaymentItem>) -> Result<Self> {
        let mut fields = Fragment::new();
        insert(&mut fields, "CURRENCYCODE", Self::DEFAULT_CURRENCY);

        if let Some(amount) = amount {
            let amount = check_amount("AMT", amount)?;
            insert(&mut fields, "AMT", amount);
        }

        Ok(Self { fields, items })
    }

    /// Simple payment with a fixed total and no items.
    pub fn from_amount(amount: &str) -> Result<Self> {
        Self::new(Some(amount), Vec::new())
    }

    /// Payment whose totals are derived from `items`.
    pub fn from_items(items: Vec<PaymentItem>) -> Self {
        let mut fields = Fragment::new();
        insert(&mut fields, "CURRENCYCODE", Self::DEFAULT_CURRENCY);
        Self { fields, items }
    }

    /// Three-character currency code.
    pub fn set_currency(&mut self, currency: &str) -> Result<()> {
        check_exact_len("CURRENCYCODE", currency, CURRENCY_LEN)?;
        insert(&mut self.fields, "CURRENCYCODE", currency);
        Ok(())
    }

    /// Total shipping costs for this order.
    pub fn set_shipping_amount(&mut self, amount: &str) -> Result<()> {
        self.set_amount_field("SHIPPINGAMT", amount)
    }

    /// Shipping insurance. `offered` also sets `INSURANCEOPTIONOFFERED=true`.
    pub fn set_insurance_amount(&mut self, amount: &str, offered: bool) -> Result<()> {
        self.set_amount_field("INSURANCEAMT", amount)?;
        if offered {
            insert(&mut self.fields, "INSURANCEOPTIONOFFERED", "true");
        }
        Ok(())
    }

    pub fn set_shipping_discount(&mut self, discount: &str) -> Result<()> {
        self.set_amount_field("SHIPPINGDISCOUNT", discount)
    }

    /// Total handling costs for this order.
    pub fn set_handling_amount(&mut self, amount: &str) -> Result<()> {
        self.set_amount_field("HANDLINGAMT", amount)
    }

    /// Description of the purchase, up to 127 characters.
    pub fn set_description(&mut self, description: &str) -> Result<()> {
        self.set_text_field("DESC", description, DESCRIPTION_MAX)
    }

    pub fn set_custom_field(&mut self, field: &str) -> Result<()> {
        self.set_text_field("CUSTOM", field, CUSTOM_MAX)
    }

    /// Merchant invoice or tracking number, up to 127 characters.
    pub fn set_invoice_number(&mut self, invoice_number: &str) -> Result<()> {
        self.set_text_field("INVNUM", invoice_number, INVOICE_MAX)
    }

    /// Third-party application code, up to 32 characters.
    pub fn set_button_source(&mut self, source: &str) -> Result<()> {
        self.set_text_field("BUTTONSOURCE", source, BUTTON_SOURCE_MAX)
    }

    /// Instant Payment Notification URL. Only honored by
    /// `DoExpressCheckoutPayment`.
    pub fn set_notify_url(&mut self, notify_url: &str) -> Result<()> {
        self.set_text_field("NOTIFYURL", notify_url, NOTIFY_URL_MAX)
    }

    /// Note to the seller, up to 255 characters.
    pub fn set_note(&mut self, note: &str) -> Result<()> {
        self.set_text_field("NOTETEXT", note, NOTE_MAX)
    }

    pub fn set_transaction_id(&mut self, transaction_id: &str) {
        insert(&mut self.fields, "TRANSACTIONID", transaction_id);
    }

    /// Payment method restriction, e.g. `InstantPaymentOnly`.
    pub fn set_allowed_payment_method(&mut self, method: &str) {
        insert(&mut self.fields, "ALLOWEDPAYMENTMETHOD", method);
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    fn set_amount_field(&mut self, field: &str, amount: &str) -> Result<()> {
        let amount = check_amount(field, amount)?;
        insert(&mut self.fields, field, amount);
        Ok(())
    }

    /// Empty text leaves the field untouched.
    fn set_text_field(&mut self, field: &str, value: &str, max: usize) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        check_max_len(field, value, max)?;
        insert(&mut self.fields, field, value);
        Ok(())
    }

    fn stored_cents(fields: &Fragment, key: &str) -> Option<u128> {
        fields.get(key).map(|amount| cents_of(Some(amount)))
    }
}

/// Stored amounts were validated by their setters and always fit in a `u64`.
fn cents_of(amount: Option<&str>) -> u128 {
    amount.and_then(parse_cents).map_or(0, u128::from)
}

impl NvpFields for Payment {
    fn nvp_fragment(&self) -> Fragment {
        let mut fragment = self.fields.clone();

        let item_fragments: Vec<Fragment> =
            self.items.iter().map(NvpFields::nvp_fragment).collect();
        append_indexed(&mut fragment, &item_fragments);

        let (item_cents, tax_cents) =
            self.items
                .iter()
                .fold((0u128, 0u128), |(amount, tax), item| {
                    (
                        amount + cents_of(item.amount()),
                        tax + cents_of(item.tax_amount()),
                    )
                });

        if item_cents > 0 {
            insert(&mut fragment, "ITEMAMT", format_cents(item_cents));
        }
        if tax_cents > 0 {
            insert(&mut fragment, "TAXAMT", format_cents(tax_cents));
        }

        let handling = Self::stored_cents(&fragment, "HANDLINGAMT");
        let shipping = Self::stored_cents(&fragment, "SHIPPINGAMT");

        if !fragment.contains_key("AMT") {
            let total = item_cents + tax_cents + handling.unwrap_or(0) + shipping.unwrap_or(0);
            insert(&mut fragment, "AMT", format_cents(total));
        }

        // ITEMAMT is mandatory on the gateway side once handling or shipping is sent.
        if (handling.is_some() || shipping.is_some()) && !fragment.contains_key("ITEMAMT") {
            if let Some(total) = fragment.get("AMT").cloned() {
                insert(&mut fragment, "ITEMAMT", total);
            }
        }

        fragment
    }
}
