//! Read back what the buyer approved.

use anyhow::Result;
use paypal_nvp_lib::requests::GetExpressCheckoutDetails;
use paypal_nvp_lib::{NvpClient, Profile, Transport};

use super::exchange;
use crate::ui;

pub async fn run<P: Profile, T: Transport>(
    client: &NvpClient<P, T>,
    token: &str,
    json: bool,
) -> Result<()> {
    ui::header("Get Express Checkout Details");

    let mut request = GetExpressCheckoutDetails::new(token)?;
    let response = exchange(client, &mut request, json).await?;

    if let Some(payer_id) = response.get("PAYERID").filter(|id| !id.is_empty()) {
        ui::success("Buyer approved the checkout");
        ui::info(&format!(
            "Capture with: paypal-nvp-demo pay --token {} --payer-id {} --amount <AMOUNT>",
            token, payer_id
        ));
    } else {
        ui::warning("No payer yet; the buyer has not approved this checkout");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::client;
    use paypal_nvp_lib::test_utils::TestFixtures;

    #[tokio::test]
    async fn test_details_sends_token() {
        let client = client();
        client.transport().push_response(format!(
            "ACK=Success&TOKEN={}&PAYERID={}",
            TestFixtures::TOKEN,
            TestFixtures::PAYER_ID
        ));

        run(&client, TestFixtures::TOKEN, false).await.unwrap();

        let sent = client.transport().last_posted().unwrap().fields();
        assert_eq!(sent["METHOD"], "GetExpressCheckoutDetails");
        assert_eq!(sent["TOKEN"], TestFixtures::TOKEN);
    }

    #[tokio::test]
    async fn test_short_token_is_rejected() {
        let client = client();

        assert!(run(&client, "EC-123", false).await.is_err());
        assert!(client.transport().posted().is_empty());
    }
}
