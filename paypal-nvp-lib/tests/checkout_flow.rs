//! End-to-end Express Checkout flow against a scripted transport.
//!
//! Drives `SetExpressCheckout` -> `GetExpressCheckoutDetails` ->
//! `DoExpressCheckoutPayment` through [`NvpClient`] without network access.

use std::sync::Mutex;

use async_trait::async_trait;
use paypal_nvp_lib::codec::decode_response;
use paypal_nvp_lib::fields::{Payment, PaymentItem, ShippingOptions};
use paypal_nvp_lib::requests::{
    DoExpressCheckoutPayment, GetExpressCheckoutDetails, PaymentAction, Request,
    SetExpressCheckout,
};
use paypal_nvp_lib::response::{gateway_errors, indexed_values};
use paypal_nvp_lib::{BaseProfile, GatewayConfig, NvpClient, NvpError, Result, Transport};

const TOKEN: &str = "EC-0AB12345CD678901E";
const PAYER_ID: &str = "95HR9CM6D56Q2";

/// Replies from a fixed script and keeps every posted body.
#[derive(Default)]
struct ScriptedTransport {
    replies: Mutex<Vec<Result<String>>>,
    bodies: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn replying(replies: Vec<Result<String>>) -> Self {
        let mut replies = replies;
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            bodies: Mutex::new(Vec::new()),
        }
    }

    fn body(&self, index: usize) -> String {
        self.bodies.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post(&self, _url: &str, body: &str, _headers: &[(&str, &str)]) -> Result<String> {
        self.bodies.lock().unwrap().push(body.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(NvpError::Transport("script exhausted".to_string())))
    }
}

fn item(name: &str, amount: &str, tax: &str) -> PaymentItem {
    let mut item = PaymentItem::new();
    item.set_name(name).unwrap();
    item.set_amount(amount).unwrap();
    item.set_tax_amount(tax).unwrap();
    item.set_quantity(1);
    item
}

fn payment() -> Payment {
    let mut payment = Payment::from_items(vec![
        item("Espresso cup", "8.00", "1.76"),
        item("Poster", "24.00", "5.28"),
    ]);
    payment.set_shipping_amount("4.50").unwrap();
    payment.set_currency("USD").unwrap();
    payment
}

fn client(transport: ScriptedTransport) -> NvpClient<BaseProfile, ScriptedTransport> {
    let profile = BaseProfile::new("seller_api1.example.com", "s3cret").with_signature("sig");
    NvpClient::new(profile, GatewayConfig::sandbox(), transport)
}

#[tokio::test]
async fn test_full_checkout_flow() {
    let transport = ScriptedTransport::replying(vec![
        Ok(format!("ACK=Success&TOKEN={}&VERSION=61%2E0", TOKEN)),
        Ok(format!(
            "ACK=Success&TOKEN={}&PAYERID={}&EMAIL=buyer%40example%2Ecom&L_NAME0=Espresso%20cup&L_NAME1=Poster",
            TOKEN, PAYER_ID
        )),
        Ok("ACK=Success&TRANSACTIONID=8AA831015G517922L&PAYMENTSTATUS=Completed".to_string()),
    ]);
    let client = client(transport);

    // Step 1: start the checkout.
    let mut checkout =
        SetExpressCheckout::new(&payment(), "https://shop.example.com/ok", "https://shop.example.com/ko")
            .unwrap();
    let mut ground = ShippingOptions::new();
    ground.set_shipping_name("Ground").unwrap();
    ground.set_shipping_amount("4.50").unwrap();
    ground.set_default_shipping_option(true);
    checkout.set_shipping_options(&[ground]).unwrap();

    assert!(client.send(&mut checkout).await);
    let redirect = client.redirect_url(&checkout).unwrap();
    assert_eq!(
        redirect,
        format!(
            "https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token={}",
            TOKEN
        )
    );

    // Step 2: read back what the buyer approved.
    let token = checkout.nvp_response()["TOKEN"].clone();
    let mut details = GetExpressCheckoutDetails::new(&token).unwrap();
    assert!(client.send(&mut details).await);
    let response = details.nvp_response();
    assert_eq!(response["EMAIL"], "buyer@example.com");
    assert_eq!(indexed_values(&response, "L_NAME"), vec!["Espresso cup", "Poster"]);

    // Step 3: capture the payment.
    let payer_id = response["PAYERID"].clone();
    let mut pay =
        DoExpressCheckoutPayment::new(&payment(), &token, PaymentAction::Sale, &payer_id).unwrap();
    assert!(client.send(&mut pay).await);
    assert_eq!(pay.nvp_response()["PAYMENTSTATUS"], "Completed");

    // The payment step repeats the aggregated totals.
    let sent = decode_response(&client.transport().body(2));
    assert_eq!(sent["METHOD"], "DoExpressCheckoutPayment");
    assert_eq!(sent["ITEMAMT"], "32.00");
    assert_eq!(sent["TAXAMT"], "7.04");
    assert_eq!(sent["AMT"], "43.54");
    assert_eq!(sent["CURRENCYCODE"], "USD");
    assert_eq!(sent["PAYERID"], PAYER_ID);
}

#[tokio::test]
async fn test_shipping_options_are_sent_indexed() {
    let client = client(ScriptedTransport::replying(vec![Ok("ACK=Success".to_string())]));

    let mut checkout =
        SetExpressCheckout::new(&payment(), "https://shop.example.com/ok", "https://shop.example.com/ko")
            .unwrap();
    let options: Vec<ShippingOptions> = [("Ground", "4.50", true), ("Air", "12.00", false)]
        .into_iter()
        .map(|(name, amount, is_default)| {
            let mut option = ShippingOptions::new();
            option.set_shipping_name(name).unwrap();
            option.set_shipping_amount(amount).unwrap();
            option.set_default_shipping_option(is_default);
            option
        })
        .collect();
    checkout.set_shipping_options(&options).unwrap();
    checkout.set_callback("https://shop.example.com/callback").unwrap();
    checkout.set_callback_timeout(3).unwrap();

    client.send(&mut checkout).await;

    let sent = decode_response(&client.transport().body(0));
    assert_eq!(sent["L_SHIPPINGOPTIONNAME0"], "Ground");
    assert_eq!(sent["L_SHIPPINGOPTIONISDEFAULT0"], "true");
    assert_eq!(sent["L_SHIPPINGOPTIONNAME1"], "Air");
    assert_eq!(sent["L_SHIPPINGOPTIONAMOUNT1"], "12.00");
    assert!(!sent.contains_key("L_SHIPPINGOPTIONNAME2"));
    assert_eq!(sent["CALLBACKTIMEOUT"], "3");
    assert_eq!(sent["VERSION"], "61.0");
}

#[tokio::test]
async fn test_gateway_failure_has_no_redirect() {
    let client = client(ScriptedTransport::replying(vec![Ok(
        "ACK=Failure&L_ERRORCODE0=10410&L_SHORTMESSAGE0=Invalid%20token&L_LONGMESSAGE0=Invalid%20token%2E&L_SEVERITYCODE0=Error"
            .to_string(),
    )]));

    let mut details = GetExpressCheckoutDetails::new(TOKEN).unwrap();
    assert!(client.send(&mut details).await);
    assert_eq!(client.redirect_url(&details), None);

    let errors = gateway_errors(&details.nvp_response());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "10410");
    assert_eq!(errors[0].long_message, "Invalid token.");
}

#[tokio::test]
async fn test_transport_error_keeps_request_usable() {
    let client = client(ScriptedTransport::replying(vec![
        Err(NvpError::ConnectionFailed {
            target: "https://api-3t.sandbox.paypal.com/nvp".to_string(),
            reason: "connection refused".to_string(),
        }),
        Ok(format!("ACK=Success&TOKEN={}", TOKEN)),
    ]));

    let mut checkout =
        SetExpressCheckout::new(&payment(), "https://shop.example.com/ok", "https://shop.example.com/ko")
            .unwrap();

    assert!(!client.send(&mut checkout).await);
    assert!(checkout.nvp_response().is_empty());
    assert_eq!(client.redirect_url(&checkout), None);

    // Retrying is up to the caller.
    assert!(client.send(&mut checkout).await);
    assert!(client.redirect_url(&checkout).is_some());
    assert_eq!(client.transport().body(0), client.transport().body(1));
}

#[tokio::test]
async fn test_production_endpoint_and_redirect() {
    let profile = BaseProfile::new("seller_api1.example.com", "s3cret");
    let config = GatewayConfig::production().with_api_signature(false);
    let client = NvpClient::new(
        profile,
        config,
        ScriptedTransport::replying(vec![Ok(format!("ACK=Success&TOKEN={}", TOKEN))]),
    );

    assert_eq!(client.config().endpoint_url(), "https://api.paypal.com/nvp");

    let mut checkout = SetExpressCheckout::new(
        &Payment::from_amount("15.50").unwrap(),
        "https://shop.example.com/ok",
        "https://shop.example.com/ko",
    )
    .unwrap();
    client.send(&mut checkout).await;

    assert_eq!(
        client.redirect_url(&checkout).unwrap(),
        format!(
            "https://www.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token={}",
            TOKEN
        )
    );
}
