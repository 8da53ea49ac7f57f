pub mod balance;
pub mod checkout;
pub mod details;
pub mod pay;

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use paypal_nvp_lib::fields::{Payment, PaymentItem};
use paypal_nvp_lib::response::{ack, gateway_errors};
use paypal_nvp_lib::validate::is_valid_amount;
use paypal_nvp_lib::{Fragment, NvpClient, Profile, Request, Transport};

use crate::ui;

/// A line item given as `NAME:AMOUNT[:TAX]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub name: String,
    pub amount: String,
    pub tax: Option<String>,
}

impl ItemSpec {
    pub fn to_item(&self) -> Result<PaymentItem> {
        let mut item = PaymentItem::new();
        item.set_name(&self.name)
            .with_context(|| format!("item {:?}", self.name))?;
        item.set_amount(&self.amount)?;
        if let Some(tax) = &self.tax {
            item.set_tax_amount(tax)?;
        }
        item.set_quantity(1);
        Ok(item)
    }
}

impl FromStr for ItemSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        let (name, amount, tax) = match parts.as_slice() {
            [name, amount] => (*name, *amount, None),
            [name, amount, tax] => (*name, *amount, Some(*tax)),
            _ => return Err(anyhow!("Invalid item '{}'. Expected NAME:AMOUNT[:TAX]", s)),
        };

        if name.trim().is_empty() {
            bail!("Item name is empty in '{}'", s);
        }
        for value in std::iter::once(amount).chain(tax) {
            if !is_valid_amount(value) {
                bail!("Invalid amount '{}' in '{}'. Use digits with two decimals, e.g. 8.00", value, s);
            }
        }

        Ok(Self {
            name: name.trim().to_string(),
            amount: amount.to_string(),
            tax: tax.map(str::to_string),
        })
    }
}

/// Payment options shared by `checkout` and `pay`.
#[derive(Args, Clone, Debug, Default)]
pub struct PaymentArgs {
    /// Line item as NAME:AMOUNT[:TAX], repeatable
    #[arg(long = "item", value_name = "NAME:AMOUNT[:TAX]")]
    pub items: Vec<ItemSpec>,

    /// Order total; overrides the sum of the items
    #[arg(long)]
    pub amount: Option<String>,

    /// Three-letter currency code
    #[arg(long)]
    pub currency: Option<String>,

    /// Shipping amount
    #[arg(long)]
    pub shipping: Option<String>,

    /// Handling amount
    #[arg(long)]
    pub handling: Option<String>,
}

impl PaymentArgs {
    pub fn to_payment(&self) -> Result<Payment> {
        if self.items.is_empty() && self.amount.is_none() {
            bail!("Either --amount or at least one --item is required");
        }

        let items = self
            .items
            .iter()
            .map(ItemSpec::to_item)
            .collect::<Result<Vec<_>>>()?;
        let mut payment = Payment::new(self.amount.as_deref(), items)?;

        if let Some(currency) = &self.currency {
            payment.set_currency(currency)?;
        }
        if let Some(shipping) = &self.shipping {
            payment.set_shipping_amount(shipping)?;
        }
        if let Some(handling) = &self.handling {
            payment.set_handling_amount(handling)?;
        }

        Ok(payment)
    }
}

/// Send `request` and return its response when the gateway accepted it.
///
/// Prints the response and any gateway errors along the way.
pub async fn exchange<P, T, R>(client: &NvpClient<P, T>, request: &mut R, json: bool) -> Result<Fragment>
where
    P: Profile,
    T: Transport,
    R: Request,
{
    let method = request
        .nvp_request()
        .get("METHOD")
        .cloned()
        .unwrap_or_default();
    tracing::debug!("Sending {} to {}", method, client.config().endpoint_url());

    let spinner = ui::spinner(&format!("Calling {}...", method));
    let received = client.send(request).await;
    spinner.finish_and_clear();

    if !received {
        bail!("No response from the gateway for {}. Run with --verbose for details", method);
    }

    let response = request.nvp_response();
    if json {
        ui::json(&serde_json::to_value(&response)?);
    } else {
        ui::separator();
        ui::response(&response);
        ui::separator();
    }

    let errors = gateway_errors(&response);
    ui::gateway_errors(&errors);

    match ack(&response) {
        Some(ack) if ack.is_success() => Ok(response),
        Some(ack) => Err(anyhow!("{} returned ACK={}", method, ack)),
        None => Err(anyhow!("{} response has no ACK", method)),
    }
}
