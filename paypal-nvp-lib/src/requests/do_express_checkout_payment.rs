//! `DoExpressCheckoutPayment`: completes a checkout the buyer approved.

use crate::fields::{Address, Payment, UserSelectedOptions};
use crate::fragment::{flag, insert, Fragment, NvpFields};
use crate::Result;

use super::{check_payer_id, check_token, PaymentAction, Request};

/// Finalize the payment of an approved checkout.
///
/// ```
/// use paypal_nvp_lib::fields::Payment;
/// use paypal_nvp_lib::requests::{DoExpressCheckoutPayment, PaymentAction, Request};
///
/// let payment = Payment::from_amount("15.50").unwrap();
/// let request = DoExpressCheckoutPayment::new(
///     &payment,
///     "EC-12345678901234567",
///     PaymentAction::Sale,
///     "ABCDEFGHIJKLM",
/// )
/// .unwrap();
///
/// assert_eq!(request.nvp_request()["PAYERID"], "ABCDEFGHIJKLM");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoExpressCheckoutPayment {
    fields: Fragment,
    response: Option<Fragment>,
}

impl DoExpressCheckoutPayment {
    /// `token` is 20 characters and `payer_id` 13, both as returned by the
    /// gateway earlier in the flow.
    pub fn new(
        payment: &Payment,
        token: &str,
        action: PaymentAction,
        payer_id: &str,
    ) -> Result<Self> {
        check_token(token)?;
        check_payer_id(payer_id)?;

        let mut fields = payment.nvp_fragment();
        insert(&mut fields, "METHOD", "DoExpressCheckoutPayment");
        insert(&mut fields, "TOKEN", token);
        insert(&mut fields, "PAYMENTACTION", action.as_str());
        insert(&mut fields, "PAYERID", payer_id);

        Ok(Self {
            fields,
            response: None,
        })
    }

    /// Ask for Fraud Management Filter details in the response.
    pub fn set_return_fmf(&mut self, fmf: bool) {
        insert(&mut self.fields, "RETURNFMFDETAILS", flag(fmf));
    }

    pub fn set_user_selected_options(&mut self, options: &UserSelectedOptions) {
        self.fields.extend(options.nvp_fragment());
    }

    pub fn set_address(&mut self, address: &Address) {
        self.fields.extend(address.nvp_fragment());
    }
}

impl Request for DoExpressCheckoutPayment {
    fn nvp_request(&self) -> Fragment {
        self.fields.clone()
    }

    fn set_nvp_response(&mut self, response: Fragment) {
        self.response = Some(response);
    }

    fn nvp_response(&self) -> Fragment {
        self.response.clone().unwrap_or_default()
    }
}
