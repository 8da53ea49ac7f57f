//! `GetExpressCheckoutDetails`: reads back buyer and payment details.

use crate::fragment::{insert, Fragment};
use crate::Result;

use super::{check_token, Request};

/// Fetch the details of a checkout identified by its token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetExpressCheckoutDetails {
    fields: Fragment,
    response: Option<Fragment>,
}

impl GetExpressCheckoutDetails {
    /// `token` must be the 20 character value returned by `SetExpressCheckout`.
    pub fn new(token: &str) -> Result<Self> {
        check_token(token)?;

        let mut fields = Fragment::new();
        insert(&mut fields, "METHOD", "GetExpressCheckoutDetails");
        insert(&mut fields, "TOKEN", token);
        Ok(Self {
            fields,
            response: None,
        })
    }
}

impl Request for GetExpressCheckoutDetails {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_only() {
        let request = GetExpressCheckoutDetails::new("EC-12345678901234567").unwrap();
        let fields = request.nvp_request();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["METHOD"], "GetExpressCheckoutDetails");
        assert_eq!(fields["TOKEN"], "EC-12345678901234567");
    }

    #[test]
    fn test_token_length() {
        assert!(GetExpressCheckoutDetails::new("EC-1234567890123456").is_err());
        assert!(GetExpressCheckoutDetails::new("EC-123456789012345678").is_err());
        assert!(GetExpressCheckoutDetails::new("").is_err());
    }
}
