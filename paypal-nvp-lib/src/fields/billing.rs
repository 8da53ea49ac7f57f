//! Billing agreements set up during checkout.

use std::fmt;
use std::str::FromStr;

use crate::fragment::{insert, Fragment, NvpFields};
use crate::validate::check_max_len;
use crate::{NvpError, Result};

const DESCRIPTION_MAX: usize = 127;
const CUSTOM_MAX: usize = 256;

/// Payment type a billing agreement requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingPaymentType {
    /// Any funding source.
    Any,
    /// Instant funding only.
    InstantOnly,
}

impl BillingPaymentType {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::InstantOnly => "InstantOnly",
        }
    }
}

impl fmt::Display for BillingPaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingPaymentType {
    type Err = NvpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Any" => Ok(Self::Any),
            "InstantOnly" => Ok(Self::InstantOnly),
            other => Err(NvpError::validation(
                "L_PAYMENTTYPE",
                format!("{:?} must be Any or InstantOnly", other),
            )),
        }
    }
}

/// One billing agreement (`L_BILLINGTYPE`, `L_BILLINGAGREEMENTDESCRIPTION`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BillingAgreement {
    fields: Fragment,
}

impl BillingAgreement {
    /// Create an empty agreement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Agreement type. Recurring payments use `RecurringPayments` and also
    /// need a description.
    pub fn set_billing_type(&mut self, billing_type: &str) {
        insert(&mut self.fields, "L_BILLINGTYPE", billing_type);
    }

    /// Terms shown to the buyer, up to 127 characters.
    pub fn set_description(&mut self, description: &str) -> Result<()> {
        check_max_len("L_BILLINGAGREEMENTDESCRIPTION", description, DESCRIPTION_MAX)?;
        insert(&mut self.fields, "L_BILLINGAGREEMENTDESCRIPTION", description);
        Ok(())
    }

    /// Ignored by the gateway for recurring payments.
    pub fn set_payment_type(&mut self, payment_type: BillingPaymentType) {
        insert(&mut self.fields, "L_PAYMENTTYPE", payment_type.as_str());
    }

    /// Free-form annotation, up to 256 characters.
    pub fn set_custom_field(&mut self, field: &str) -> Result<()> {
        check_max_len("L_BILLINGAGREEMENTCUSTOM", field, CUSTOM_MAX)?;
        insert(&mut self.fields, "L_BILLINGAGREEMENTCUSTOM", field);
        Ok(())
    }
}

impl NvpFields for BillingAgreement {
    fn nvp_fragment(&self) -> Fragment {
        self.fields.clone()
    }
}
