//! Buyer and ship-to addresses.

use crate::fragment::{insert, Fragment, NvpFields};
use crate::validate::check_max_len;
use crate::Result;

const STREET_MAX: usize = 100;
const CITY_MAX: usize = 40;
const STATE_MAX: usize = 40;
const ZIP_MAX: usize = 20;
const PHONE_MAX: usize = 20;
const SHIP_TO_NAME_MAX: usize = 32;

/// Address fields merged into a request as `STREET`, `CITY`, `STATE`, ...
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    fields: Fragment,
}

impl Address {
    /// Default country code.
    pub const DEFAULT_COUNTRY: &'static str = "IT";

    /// Create an address in [`Self::DEFAULT_COUNTRY`].
    pub fn new(street: &str, city: &str, state: &str) -> Result<Self> {
        Self::with_country(street, city, state, Self::DEFAULT_COUNTRY)
    }

    /// Create an address with an explicit country code.
    pub fn with_country(street: &str, city: &str, state: &str, country: &str) -> Result<Self> {
        check_max_len("STREET", street, STREET_MAX)?;
        check_max_len("CITY", city, CITY_MAX)?;
        check_max_len("STATE", state, STATE_MAX)?;

        let mut fields = Fragment::new();
        insert(&mut fields, "STREET", street);
        insert(&mut fields, "CITY", city);
        insert(&mut fields, "STATE", state);
        insert(&mut fields, "COUNTRY", country);
        Ok(Self { fields })
    }

    /// Second street line, up to 100 characters.
    pub fn set_street_2(&mut self, street: &str) -> Result<()> {
        check_max_len("STREET2", street, STREET_MAX)?;
        insert(&mut self.fields, "STREET2", street);
        Ok(())
    }

    /// ZIP or other postal code, up to 20 characters.
    pub fn set_zip(&mut self, zip_code: &str) -> Result<()> {
        check_max_len("ZIP", zip_code, ZIP_MAX)?;
        insert(&mut self.fields, "ZIP", zip_code);
        Ok(())
    }

    /// Phone number, up to 20 characters.
    pub fn set_phone_number(&mut self, phone_number: &str) -> Result<()> {
        check_max_len("SHIPTOPHONENUM", phone_number, PHONE_MAX)?;
        insert(&mut self.fields, "SHIPTOPHONENUM", phone_number);
        Ok(())
    }
}

impl NvpFields for Address {
    fn nvp_fragment(&self) -> Fragment {
        self.fields.clone()
    }
}

/// Shipping address (`SHIPTO*` fields).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShipToAddress {
    fields: Fragment,
}

impl ShipToAddress {
    /// Default country code.
    pub const DEFAULT_COUNTRY: &'static str = "NL";

    /// Create a shipping address in [`Self::DEFAULT_COUNTRY`].
    ///
    /// `name` is the person the address belongs to (32 characters max),
    /// `street` 100, `city` and `state` 40 each.
    pub fn new(name: &str, street: &str, city: &str, state: &str) -> Result<Self> {
        Self::with_country(name, street, city, state, Self::DEFAULT_COUNTRY)
    }

    /// Create a shipping address with an explicit country code.
    pub fn with_country(
        name: &str,
        street: &str,
        city: &str,
        state: &str,
        country: &str,
    ) -> Result<Self> {
        check_max_len("SHIPTONAME", name, SHIP_TO_NAME_MAX)?;
        check_max_len("SHIPTOSTREET", street, STREET_MAX)?;
        check_max_len("SHIPTOCITY", city, CITY_MAX)?;
        check_max_len("SHIPTOSTATE", state, STATE_MAX)?;

        let mut fields = Fragment::new();
        insert(&mut fields, "SHIPTONAME", name);
        insert(&mut fields, "SHIPTOSTREET", street);
        insert(&mut fields, "SHIPTOCITY", city);
        insert(&mut fields, "SHIPTOSTATE", state);
        insert(&mut fields, "SHIPTOCOUNTRY", country);
        Ok(Self { fields })
    }

    /// Second street line, up to 100 characters.
    pub fn set_street_2(&mut self, street: &str) -> Result<()> {
        check_max_len("SHIPTOSTREET2", street, STREET_MAX)?;
        insert(&mut self.fields, "SHIPTOSTREET2", street);
        Ok(())
    }

    /// ZIP or other postal code, up to 20 characters.
    pub fn set_zip(&mut self, zip_code: &str) -> Result<()> {
        check_max_len("SHIPTOZIP", zip_code, ZIP_MAX)?;
        insert(&mut self.fields, "SHIPTOZIP", zip_code);
        Ok(())
    }

    /// Phone number, up to 20 characters.
    pub fn set_phone_number(&mut self, phone_number: &str) -> Result<()> {
        check_max_len("SHIPTOPHONENUM", phone_number, PHONE_MAX)?;
        insert(&mut self.fields, "SHIPTOPHONENUM", phone_number);
        Ok(())
    }
}

impl NvpFields for ShipToAddress {
    fn nvp_fragment(&self) -> Fragment {
        self.fields.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_defaults_to_italy() {
        let address = Address::new("Via Roma 1", "Milano", "MI").unwrap();
        let fields = address.nvp_fragment();

        assert_eq!(fields["STREET"], "Via Roma 1");
        assert_eq!(fields["COUNTRY"], "IT");
    }

    #[test]
    fn test_address_zip_is_validated_and_stored() {
        let mut address = Address::new("Via Roma 1", "Milano", "MI").unwrap();
        address.set_zip("20121").unwrap();
        assert_eq!(address.nvp_fragment()["ZIP"], "20121");

        assert!(address.set_zip(&"9".repeat(21)).is_err());
        assert_eq!(address.nvp_fragment()["ZIP"], "20121");
    }

    #[test]
    fn test_ship_to_limits() {
        assert!(ShipToAddress::new(&"n".repeat(33), "street", "city", "state").is_err());
        assert!(ShipToAddress::new("name", &"s".repeat(101), "city", "state").is_err());
        assert!(ShipToAddress::new("name", "street", &"c".repeat(41), "state").is_err());
        assert!(ShipToAddress::new("name", "street", "city", &"s".repeat(41)).is_err());
    }

    #[test]
    fn test_ship_to_fields() {
        let mut address =
            ShipToAddress::with_country("Jan Jansen", "Damrak 1", "Amsterdam", "NH", "NL").unwrap();
        address.set_street_2("2e verdieping").unwrap();
        address.set_zip("1012 LG").unwrap();
        address.set_phone_number("+31201234567").unwrap();

        let fields = address.nvp_fragment();
        assert_eq!(fields["SHIPTONAME"], "Jan Jansen");
        assert_eq!(fields["SHIPTOSTREET2"], "2e verdieping");
        assert_eq!(fields["SHIPTOZIP"], "1012 LG");
        assert_eq!(fields["SHIPTOPHONENUM"], "+31201234567");
        assert_eq!(fields["SHIPTOCOUNTRY"], "NL");
    }
}
