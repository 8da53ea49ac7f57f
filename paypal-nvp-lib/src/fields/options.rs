//! Shipping and insurance choices the buyer made on the PayPal pages.

use std::fmt;
use std::str::FromStr;

use crate::fragment::{bool_text, insert, Fragment, NvpFields};
use crate::validate::check_amount;
use crate::{NvpError, Result};

/// How the shipping options shown to the buyer were determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShippingCalculationMode {
    /// Options returned by the merchant callback.
    Callback,
    /// Flat rate options sent with the checkout.
    FlatRate,
}

impl ShippingCalculationMode {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Callback => "CALLBACK",
            Self::FlatRate => "FLATRATE",
        }
    }
}

impl fmt::Display for ShippingCalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingCalculationMode {
    type Err = NvpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CALLBACK" => Ok(Self::Callback),
            "FLATRATE" => Ok(Self::FlatRate),
            other => Err(NvpError::validation(
                "SHIPPINGCALCULATIONMODE",
                format!("{:?} must be CALLBACK or FLATRATE", other),
            )),
        }
    }
}

/// Options selected by the buyer, passed back on `DoExpressCheckoutPayment`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserSelectedOptions {
    fields: Fragment,
}

impl UserSelectedOptions {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_shipping_calculation(&mut self, mode: ShippingCalculationMode) {
        insert(&mut self.fields, "SHIPPINGCALCULATIONMODE", mode.as_str());
    }

    pub fn set_insurance(&mut self, insurance: bool) {
        let selected = if insurance { "Yes" } else { "No" };
        insert(&mut self.fields, "INSURANCEOPTIONSELECTED", selected);
    }

    /// Whether the buyer kept the default shipping option.
    ///
    /// The gateway also receives `SHIPPINGOPTIONNAME=true` when set.
    pub fn set_default_shipping_option(&mut self, is_default: bool) {
        let value = bool_text(is_default);
        insert(&mut self.fields, "SHIPPINGOPTIONISDEFAULT", value);
        if is_default {
            insert(&mut self.fields, "SHIPPINGOPTIONNAME", value);
        }
    }

    /// Shipping amount the buyer chose.
    pub fn set_shipping_amount(&mut self, amount: &str) -> Result<()> {
        let amount = check_amount("SHIPPINGOPTIONAMOUNT", amount)?;
        insert(&mut self.fields, "SHIPPINGOPTIONAMOUNT", amount);
        Ok(())
    }
}

impl NvpFields for UserSelectedOptions {
    fn nvp_fragment(&self) -> Fragment {
        self.fields.clone()
    }
}
