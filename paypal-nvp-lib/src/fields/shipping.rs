//! Flat rate shipping options offered on the review page.

use crate::fragment::{bool_text, insert, Fragment, NvpFields};
use crate::validate::{check_amount, check_max_len};
use crate::Result;

const OPTION_TEXT_MAX: usize = 50;

/// One flat rate shipping option.
///
/// Required when a callback URL is set on
/// [`SetExpressCheckout`](crate::requests::SetExpressCheckout). Exactly one
/// option in the list must be the default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShippingOptions {
    fields: Fragment,
}

impl ShippingOptions {
    /// Create an empty option.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark this option as the one PayPal selects by default.
    pub fn set_default_shipping_option(&mut self, is_default: bool) {
        insert(
            &mut self.fields,
            "L_SHIPPINGOPTIONISDEFAULT",
            bool_text(is_default),
        );
    }

    /// Internal name such as Air, Ground or Expedited (50 characters max).
    pub fn set_shipping_name(&mut self, name: &str) -> Result<()> {
        check_max_len("L_SHIPPINGOPTIONNAME", name, OPTION_TEXT_MAX)?;
        insert(&mut self.fields, "L_SHIPPINGOPTIONNAME", name);
        Ok(())
    }

    /// Label shown to the buyer, e.g. "Ground: 5-7 days" (50 characters max).
    pub fn set_shipping_label(&mut self, label: &str) -> Result<()> {
        check_max_len("L_SHIPPINGOPTIONLABEL", label, OPTION_TEXT_MAX)?;
        insert(&mut self.fields, "L_SHIPPINGOPTIONLABEL", label);
        Ok(())
    }

    /// Price of this option.
    pub fn set_shipping_amount(&mut self, amount: &str) -> Result<()> {
        let amount = check_amount("L_SHIPPINGOPTIONAMOUNT", amount)?;
        insert(&mut self.fields, "L_SHIPPINGOPTIONAMOUNT", amount);
        Ok(())
    }
}

impl NvpFields for ShippingOptions {
    fn nvp_fragment(&self) -> Fragment {
        self.fields.clone()
    }
}
