//! `SetExpressCheckout`: starts a checkout and obtains a token.

use crate::fields::{Address, BillingAgreement, Payment, ShipToAddress, ShippingOptions};
use crate::fragment::{append_indexed, flag, insert, Fragment, NvpFields};
use crate::validate::{check_amount, check_email, check_hexcolor, check_max_len};
use crate::{NvpError, Result};

use super::{check_token, ChannelType, LandingPage, PaymentAction, Request, SolutionType};

const URL_MAX: usize = 2048;
const CALLBACK_MAX: usize = 1024;
const PAGE_STYLE_MAX: usize = 30;
const HEADER_IMAGE_MAX: usize = 127;
const EMAIL_MAX: usize = 127;
const BUYER_USERNAME_MAX: usize = 255;
const CALLBACK_TIMEOUT_RANGE: std::ops::RangeInclusive<u32> = 1..=6;

/// Initiates an Express Checkout.
///
/// On success the response carries the `TOKEN` used to build the redirect
/// URL and for the follow-up calls.
///
/// # Example
///
/// ```
/// use paypal_nvp_lib::fields::Payment;
/// use paypal_nvp_lib::requests::{Request, SetExpressCheckout};
///
/// let payment = Payment::from_amount("15.50").unwrap();
/// let request = SetExpressCheckout::new(
///     &payment,
///     "https://shop.example.com/return",
///     "https://shop.example.com/cancel",
/// )
/// .unwrap();
///
/// let fields = request.nvp_request();
/// assert_eq!(fields["METHOD"], "SetExpressCheckout");
/// assert_eq!(fields["AMT"], "15.50");
/// assert!(request.nvp_response().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetExpressCheckout {
    fields: Fragment,
    shipping_options: Vec<Fragment>,
    billing_agreements: Vec<Fragment>,
    response: Option<Fragment>,
}

impl SetExpressCheckout {
    /// Start a checkout for `payment`.
    ///
    /// The buyer returns to `return_url` after approving and to
    /// `cancel_url` after cancelling. Both are limited to 2048 characters.
    pub fn new(payment: &Payment, return_url: &str, cancel_url: &str) -> Result<Self> {
        check_max_len("RETURNURL", return_url, URL_MAX)?;
        check_max_len("CANCELURL", cancel_url, URL_MAX)?;

        let mut fields = payment.nvp_fragment();
        insert(&mut fields, "METHOD", "SetExpressCheckout");
        insert(&mut fields, "RETURNURL", return_url);
        insert(&mut fields, "CANCELURL", cancel_url);

        Ok(Self {
            fields,
            shipping_options: Vec::new(),
            billing_agreements: Vec::new(),
            response: None,
        })
    }

    /// Token of an earlier `SetExpressCheckout`, to update that checkout.
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        check_token(token)?;
        insert(&mut self.fields, "TOKEN", token);
        Ok(())
    }

    /// Highest total the order may reach once shipping and tax are known.
    pub fn set_max_amount(&mut self, max_amount: &str) -> Result<()> {
        let max_amount = check_amount("MAXAMT", max_amount)?;
        insert(&mut self.fields, "MAXAMT", max_amount);
        Ok(())
    }

    /// URL of the instant update callback, up to 1024 characters.
    pub fn set_callback(&mut self, callback: &str) -> Result<()> {
        check_max_len("CALLBACK", callback, CALLBACK_MAX)?;
        insert(&mut self.fields, "CALLBACK", callback);
        Ok(())
    }

    /// Seconds PayPal waits for the callback, between 1 and 6.
    pub fn set_callback_timeout(&mut self, timeout: u32) -> Result<()> {
        if !CALLBACK_TIMEOUT_RANGE.contains(&timeout) {
            return Err(NvpError::validation(
                "CALLBACKTIMEOUT",
                format!("{} is outside 1-6 seconds", timeout),
            ));
        }
        insert(&mut self.fields, "CALLBACKTIMEOUT", timeout.to_string());
        Ok(())
    }

    /// Require a confirmed shipping address, overriding the account profile.
    pub fn set_require_confirmed_shipping(&mut self, required: bool) {
        insert(&mut self.fields, "REQCONFIRMSHIPPING", flag(required));
    }

    /// Hide all shipping address fields on the PayPal pages.
    pub fn set_no_shipping(&mut self, no_shipping: bool) {
        insert(&mut self.fields, "NOSHIPPING", flag(no_shipping));
    }

    /// Let the buyer leave a note for the merchant.
    pub fn set_allow_note(&mut self, allow_note: bool) {
        insert(&mut self.fields, "ALLOWNOTE", flag(allow_note));
    }

    /// Show the shipping address from this request instead of the one on
    /// file. Pair with [`Self::set_shipping_address`].
    pub fn set_address_override(&mut self, address_override: bool) {
        insert(&mut self.fields, "ADDROVERRIDE", flag(address_override));
    }

    pub fn set_locale_code(&mut self, locale_code: &str) {
        insert(&mut self.fields, "LOCALECODE", locale_code);
    }

    /// Custom payment page style name, up to 30 characters.
    pub fn set_page_style(&mut self, page_style: &str) -> Result<()> {
        check_max_len("PAGESTYLE", page_style, PAGE_STYLE_MAX)?;
        insert(&mut self.fields, "PAGESTYLE", page_style);
        Ok(())
    }

    /// Header image URL, up to 127 characters.
    pub fn set_header_image(&mut self, image_url: &str) -> Result<()> {
        check_max_len("HDRIMG", image_url, HEADER_IMAGE_MAX)?;
        insert(&mut self.fields, "HDRIMG", image_url);
        Ok(())
    }

    pub fn set_border_color(&mut self, hex_color: &str) -> Result<()> {
        self.set_color("HDRBORDERCOLOR", hex_color)
    }

    pub fn set_background_color(&mut self, hex_color: &str) -> Result<()> {
        self.set_color("HDRBACKCOLOR", hex_color)
    }

    pub fn set_payflow_color(&mut self, hex_color: &str) -> Result<()> {
        self.set_color("PAYFLOWCOLOR", hex_color)
    }

    fn set_color(&mut self, field: &str, hex_color: &str) -> Result<()> {
        check_hexcolor(field, hex_color)?;
        insert(&mut self.fields, field, hex_color);
        Ok(())
    }

    pub fn set_payment_action(&mut self, action: PaymentAction) {
        insert(&mut self.fields, "PAYMENTACTION", action.as_str());
    }

    /// Buyer email used to prefill the PayPal login page.
    pub fn set_email(&mut self, email: &str) -> Result<()> {
        check_max_len("EMAIL", email, EMAIL_MAX)?;
        check_email("EMAIL", email)?;
        insert(&mut self.fields, "EMAIL", email);
        Ok(())
    }

    pub fn set_solution_type(&mut self, solution_type: SolutionType) {
        insert(&mut self.fields, "SOLUTIONTYPE", solution_type.as_str());
    }

    pub fn set_landing_page(&mut self, landing_page: LandingPage) {
        insert(&mut self.fields, "LANDINGPAGE", landing_page.as_str());
    }

    pub fn set_channel_type(&mut self, channel_type: ChannelType) {
        insert(&mut self.fields, "CHANNELTYPE", channel_type.as_str());
    }

    /// Return page after a successful giropay payment.
    pub fn set_giropay_success_url(&mut self, url: &str) {
        insert(&mut self.fields, "GIROPAYSUCCESSURL", url);
    }

    /// Return page after a cancelled or failed giropay payment.
    pub fn set_giropay_cancel_url(&mut self, url: &str) {
        insert(&mut self.fields, "GIROPAYCANCELURL", url);
    }

    /// Return page after a bank transfer payment.
    pub fn set_banktx_pending_url(&mut self, url: &str) {
        insert(&mut self.fields, "BANKTXNPENDINGURL", url);
    }

    pub fn set_address(&mut self, address: &Address) {
        self.fields.extend(address.nvp_fragment());
    }

    pub fn set_shipping_address(&mut self, address: &ShipToAddress) {
        self.fields.extend(address.nvp_fragment());
    }

    /// eBay buyer id, up to 255 characters.
    pub fn set_buyer_details(&mut self, buyer: &str) -> Result<()> {
        check_max_len("BUYERUSERNAME", buyer, BUYER_USERNAME_MAX)?;
        insert(&mut self.fields, "BUYERUSERNAME", buyer);
        Ok(())
    }

    /// Add flat rate shipping options, indexed after any already added.
    pub fn set_shipping_options(&mut self, options: &[ShippingOptions]) -> Result<()> {
        if options.is_empty() {
            return Err(NvpError::validation(
                "L_SHIPPINGOPTIONNAME",
                "no shipping options supplied",
            ));
        }
        self.shipping_options
            .extend(options.iter().map(NvpFields::nvp_fragment));
        Ok(())
    }

    /// Add billing agreements, indexed after any already added.
    pub fn set_billing_agreement(&mut self, agreements: &[BillingAgreement]) -> Result<()> {
        if agreements.is_empty() {
            return Err(NvpError::validation(
                "L_BILLINGTYPE",
                "no billing agreements supplied",
            ));
        }
        self.billing_agreements
            .extend(agreements.iter().map(NvpFields::nvp_fragment));
        Ok(())
    }
}

impl Request for SetExpressCheckout {
    fn nvp_request(&self) -> Fragment {
        let mut fragment = self.fields.clone();
        append_indexed(&mut fragment, &self.shipping_options);
        append_indexed(&mut fragment, &self.billing_agreements);
        fragment
    }

    fn set_nvp_response(&mut self, response: Fragment) {
        self.response = Some(response);
    }

    fn nvp_response(&self) -> Fragment {
        self.response.clone().unwrap_or_default()
    }
}
