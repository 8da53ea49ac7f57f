//! Line items of a payment.

use crate::fragment::{insert, Fragment, NvpFields};
use crate::validate::{check_amount, check_max_len};
use crate::Result;

const TEXT_MAX: usize = 127;

/// A single line item.
///
/// Keys are stored without their positional suffix; [`Payment`](super::Payment)
/// adds the index when it flattens its item list.
///
/// ```
/// use paypal_nvp_lib::fields::PaymentItem;
/// use paypal_nvp_lib::fragment::NvpFields;
///
/// let mut item = PaymentItem::new();
/// item.set_name("Coffee mug").unwrap();
/// item.set_amount("8.00").unwrap();
/// item.set_quantity(2);
///
/// let fields = item.nvp_fragment();
/// assert_eq!(fields["L_AMT"], "8.00");
/// assert_eq!(fields["L_QTY"], "2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentItem {
    fields: Fragment,
}

impl PaymentItem {
    /// Create an item with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Item name, up to 127 characters.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        check_max_len("L_NAME", name, TEXT_MAX)?;
        insert(&mut self.fields, "L_NAME", name);
        Ok(())
    }

    /// Item description, up to 127 characters.
    pub fn set_description(&mut self, description: &str) -> Result<()> {
        check_max_len("L_DESC", description, TEXT_MAX)?;
        insert(&mut self.fields, "L_DESC", description);
        Ok(())
    }

    /// Unit price.
    pub fn set_amount(&mut self, amount: &str) -> Result<()> {
        let amount = check_amount("L_AMT", amount)?;
        insert(&mut self.fields, "L_AMT", amount);
        Ok(())
    }

    /// Merchant item number, up to 127 characters.
    pub fn set_item_number(&mut self, number: &str) -> Result<()> {
        check_max_len("L_NUMBER", number, TEXT_MAX)?;
        insert(&mut self.fields, "L_NUMBER", number);
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        insert(&mut self.fields, "L_QTY", quantity.to_string());
    }

    /// Sales tax for this item.
    pub fn set_tax_amount(&mut self, amount: &str) -> Result<()> {
        let amount = check_amount("L_TAXAMT", amount)?;
        insert(&mut self.fields, "L_TAXAMT", amount);
        Ok(())
    }

    pub fn set_weight(&mut self, value: u32, unit: &str) {
        self.set_measure("L_ITEMWEIGHTVALUE", "L_ITEMWEIGHTUNIT", value, unit);
    }

    pub fn set_length(&mut self, value: u32, unit: &str) {
        self.set_measure("L_ITEMLENGTHVALUE", "L_ITEMLENGTHUNIT", value, unit);
    }

    pub fn set_width(&mut self, value: u32, unit: &str) {
        self.set_measure("L_ITEMWIDTHVALUE", "L_ITEMWIDTHUNIT", value, unit);
    }

    pub fn set_height(&mut self, value: u32, unit: &str) {
        self.set_measure("L_ITEMHEIGHTVALUE", "L_ITEMHEIGHTUNIT", value, unit);
    }

    fn set_measure(&mut self, value_key: &str, unit_key: &str, value: u32, unit: &str) {
        insert(&mut self.fields, value_key, value.to_string());
        insert(&mut self.fields, unit_key, unit);
    }

    /// Formatted unit price, if set.
    pub(crate) fn amount(&self) -> Option<&str> {
        self.fields.get("L_AMT").map(String::as_str)
    }

    /// Formatted tax amount, if set.
    pub(crate) fn tax_amount(&self) -> Option<&str> {
        self.fields.get("L_TAXAMT").map(String::as_str)
    }
}

impl NvpFields for PaymentItem {
    fn nvp_fragment(&self) -> Fragment {
        self.fields.clone()
    }
}
