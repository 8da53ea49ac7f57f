//! `GetBalance`: available balance of the merchant account.

use crate::fragment::{flag, insert, Fragment};

use super::Request;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetBalance {
    fields: Fragment,
    response: Option<Fragment>,
}

impl GetBalance {
    pub fn new() -> Self {
        let mut fields = Fragment::new();
        insert(&mut fields, "METHOD", "GetBalance");
        Self {
            fields,
            response: None,
        }
    }

    /// Return the balance in every held currency, not only the primary one.
    pub fn set_all_currencies(&mut self, all_currencies: bool) {
        insert(&mut self.fields, "RETURNALLCURRENCIES", flag(all_currencies));
    }
}

impl Default for GetBalance {
    fn default() -> Self {
        Self::new()
    }
}

impl Request for GetBalance {
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
    fn test_balance_request() {
        let mut request = GetBalance::new();
        assert_eq!(request.nvp_request().len(), 1);

        request.set_all_currencies(true);
        assert_eq!(request.nvp_request()["RETURNALLCURRENCIES"], "1");
        request.set_all_currencies(false);
        assert_eq!(request.nvp_request()["RETURNALLCURRENCIES"], "0");
    }
}
