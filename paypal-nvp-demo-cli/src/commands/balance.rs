//! Show the account balance.

use anyhow::Result;
use paypal_nvp_lib::requests::GetBalance;
use paypal_nvp_lib::response::indexed_values;
use paypal_nvp_lib::{Fragment, NvpClient, Profile, Transport};
use serde::Serialize;

use super::exchange;
use crate::ui;

/// One currency line of a balance response.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct BalanceLine {
    pub amount: String,
    pub currency: String,
}

/// Pair `L_AMTn` with `L_CURRENCYCODEn`.
pub fn balance_lines(response: &Fragment) -> Vec<BalanceLine> {
    indexed_values(response, "L_AMT")
        .into_iter()
        .zip(indexed_values(response, "L_CURRENCYCODE"))
        .map(|(amount, currency)| BalanceLine { amount, currency })
        .collect()
}

pub async fn run<P: Profile, T: Transport>(
    client: &NvpClient<P, T>,
    all_currencies: bool,
    json: bool,
) -> Result<()> {
    ui::header("Get Balance");

    let mut request = GetBalance::new();
    request.set_all_currencies(all_currencies);

    let response = exchange(client, &mut request, json).await?;
    let lines = balance_lines(&response);

    if json {
        ui::json(&serde_json::to_value(&lines)?);
    } else if lines.is_empty() {
        ui::warning("No balance lines returned");
    } else {
        for line in &lines {
            ui::key_value(&line.currency, &line.amount);
        }
    }

    Ok(())
}
