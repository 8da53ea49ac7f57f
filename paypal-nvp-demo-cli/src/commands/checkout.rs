//! Start an Express Checkout and print where to send the buyer.

use anyhow::{Context, Result};
use paypal_nvp_lib::requests::SetExpressCheckout;
use paypal_nvp_lib::{NvpClient, Profile, Transport};

use super::{exchange, PaymentArgs};
use crate::ui;

pub async fn run<P: Profile, T: Transport>(
    client: &NvpClient<P, T>,
    payment: &PaymentArgs,
    return_url: &str,
    cancel_url: &str,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    ui::header("Set Express Checkout");

    let payment = payment.to_payment()?;
    let mut request = SetExpressCheckout::new(&payment, return_url, cancel_url)
        .context("Invalid checkout request")?;

    ui::key_value("Items", &payment.item_count().to_string());
    ui::key_value("Endpoint", &client.config().endpoint_url());

    if dry_run {
        ui::info("Dry run: nothing is sent");
        println!("{}", client.preview_request(&request));
        return Ok(());
    }

    exchange(client, &mut request, json).await?;

    match client.redirect_url(&request) {
        Some(url) => {
            ui::success("Checkout created");
            ui::key_value("Redirect buyer to", &url);
        }
        None => ui::warning("The gateway did not return a token to redirect with"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::client;
    use paypal_nvp_lib::test_utils::TestFixtures;

    fn mug() -> PaymentArgs {
        PaymentArgs {
            items: vec!["Mug:8.00".parse().unwrap()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_checkout_sends_set_express_checkout() {
        let client = client();
        client
            .transport()
            .push_response(TestFixtures::checkout_success_body());

        run(
            &client,
            &mug(),
            TestFixtures::RETURN_URL,
            TestFixtures::CANCEL_URL,
            false,
            false,
        )
        .await
        .unwrap();

        let sent = client.transport().last_posted().unwrap().fields();
        assert_eq!(sent["METHOD"], "SetExpressCheckout");
        assert_eq!(sent["L_NAME0"], "Mug");
        assert_eq!(sent["AMT"], "8.00");
        assert_eq!(sent["RETURNURL"], TestFixtures::RETURN_URL);
    }

    #[tokio::test]
    async fn test_dry_run_sends_nothing() {
        let client = client();

        run(
            &client,
            &mug(),
            TestFixtures::RETURN_URL,
            TestFixtures::CANCEL_URL,
            true,
            false,
        )
        .await
        .unwrap();

        assert!(client.transport().posted().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_return_url_is_rejected_before_sending() {
        let client = client();
        let long_url = format!("https://shop.example.com/{}", "a".repeat(2048));

        let result = run(&client, &mug(), &long_url, TestFixtures::CANCEL_URL, false, false).await;

        assert!(result.is_err());
        assert!(client.transport().posted().is_empty());
    }
}
