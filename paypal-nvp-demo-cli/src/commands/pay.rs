//! Capture an approved checkout.

use anyhow::Result;
use paypal_nvp_lib::requests::{DoExpressCheckoutPayment, PaymentAction};
use paypal_nvp_lib::{NvpClient, Profile, Transport};

use super::{exchange, PaymentArgs};
use crate::ui;

pub async fn run<P: Profile, T: Transport>(
    client: &NvpClient<P, T>,
    token: &str,
    payer_id: &str,
    action: PaymentAction,
    payment: &PaymentArgs,
    json: bool,
) -> Result<()> {
    ui::header("Do Express Checkout Payment");

    let payment = payment.to_payment()?;
    let mut request = DoExpressCheckoutPayment::new(&payment, token, action, payer_id)?;
    ui::key_value("Action", action.as_str());

    let response = exchange(client, &mut request, json).await?;

    match response.get("TRANSACTIONID") {
        Some(id) => {
            ui::success("Payment captured");
            ui::key_value("Transaction", id);
        }
        None => ui::warning("Accepted without a transaction id"),
    }
    if let Some(status) = response.get("PAYMENTSTATUS") {
        ui::key_value("Status", status);
    }

    Ok(())
}
