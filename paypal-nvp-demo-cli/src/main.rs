//! PayPal NVP Demo CLI
//!
//! Command-line interface for walking through the Express Checkout flow.
//!
//! Credentials are read from `PAYPAL_NVP_USERNAME`, `PAYPAL_NVP_PASSWORD`
//! and the optional `PAYPAL_NVP_SIGNATURE` / `PAYPAL_NVP_SUBJECT`. `checkout --dry-run`
//! works without them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paypal_nvp_lib::requests::PaymentAction;
use paypal_nvp_lib::{
    gateway_config_from_env, profile_from_env, BaseProfile, GatewayConfig, HttpPostTransport,
    NvpClient,
};

mod commands;
mod ui;

use commands::PaymentArgs;

#[derive(Parser)]
#[command(name = "paypal-nvp-demo")]
#[command(about = "PayPal NVP Demo CLI - Drive Express Checkout from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use the sandbox endpoints (also PAYPAL_NVP_SANDBOX)
    #[arg(long, global = true)]
    sandbox: bool,

    /// Use the certificate endpoint instead of the signature one
    #[arg(long, global = true)]
    no_api_signature: bool,

    /// Print responses as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a checkout and print the buyer redirect URL
    Checkout {
        #[command(flatten)]
        payment: PaymentArgs,

        /// Where the buyer lands after approving
        #[arg(long)]
        return_url: String,

        /// Where the buyer lands after cancelling
        #[arg(long)]
        cancel_url: String,

        /// Print the encoded request without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show what the buyer approved for a checkout token
    Details {
        /// Checkout token returned by `checkout`
        #[arg(short, long)]
        token: String,
    },

    /// Capture an approved checkout
    Pay {
        /// Checkout token returned by `checkout`
        #[arg(short, long)]
        token: String,

        /// Payer id returned by `details`
        #[arg(long)]
        payer_id: String,

        /// Sale, Authorization or Order
        #[arg(long, default_value = "Sale")]
        action: PaymentAction,

        #[command(flatten)]
        payment: PaymentArgs,
    },

    /// Show the account balance
    Balance {
        /// Include every currency held
        #[arg(long)]
        all_currencies: bool,
    },
}

/// Username placed in dry-run previews when no credentials are configured.
const DRY_RUN_USER: &str = "dry-run";

impl Commands {
    fn is_dry_run(&self) -> bool {
        matches!(self, Commands::Checkout { dry_run: true, .. })
    }
}

/// Credentials for `command`. A dry run only previews the message, so it
/// falls back to placeholder credentials.
fn resolve_profile(
    command: &Commands,
    loaded: paypal_nvp_lib::Result<BaseProfile>,
) -> Result<BaseProfile> {
    match loaded {
        Ok(profile) => Ok(profile),
        Err(e) if command.is_dry_run() => {
            tracing::debug!("No credentials for dry run: {}", e);
            ui::warning("No credentials configured; previewing with placeholders");
            Ok(BaseProfile::new(DRY_RUN_USER, DRY_RUN_USER))
        }
        Err(e) => Err(e)
            .context("Set PAYPAL_NVP_USERNAME and PAYPAL_NVP_PASSWORD to run commands"),
    }
}

impl Cli {
    fn gateway_config(&self) -> GatewayConfig {
        let mut config = gateway_config_from_env();
        if self.sandbox {
            config = config.with_sandbox(true);
        }
        if self.no_api_signature {
            config = config.with_api_signature(false);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("paypal_nvp_demo=debug,paypal_nvp_lib=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("paypal_nvp_demo=info,paypal_nvp_lib=warn")
            .init();
    }

    let config = cli.gateway_config();
    tracing::debug!("Gateway endpoint: {}", config.endpoint_url());

    let profile = resolve_profile(&cli.command, profile_from_env())?;
    if cli.verbose {
        ui::info(&format!("Merchant: {}", profile.username()));
    }

    let transport = HttpPostTransport::from_config(&config)?;
    let client = NvpClient::new(profile, config, transport);

    // Dispatch commands
    match &cli.command {
        Commands::Checkout {
            payment,
            return_url,
            cancel_url,
            dry_run,
        } => {
            commands::checkout::run(&client, payment, return_url, cancel_url, *dry_run, cli.json)
                .await?;
        }
        Commands::Details { token } => {
            commands::details::run(&client, token, cli.json).await?;
        }
        Commands::Pay {
            token,
            payer_id,
            action,
            payment,
        } => {
            commands::pay::run(&client, token, payer_id, *action, payment, cli.json).await?;
        }
        Commands::Balance { all_currencies } => {
            commands::balance::run(&client, *all_currencies, cli.json).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paypal_nvp_lib::NvpError;

    fn checkout_args(dry_run: bool) -> Vec<&'static str> {
        let mut args = vec![
            "paypal-nvp-demo",
            "checkout",
            "--amount",
            "15.50",
            "--return-url",
            "https://shop.example.com/ok",
            "--cancel-url",
            "https://shop.example.com/ko",
        ];
        if dry_run {
            args.push("--dry-run");
        }
        args
    }

    fn missing_credentials() -> paypal_nvp_lib::Result<BaseProfile> {
        Err(NvpError::Config("PAYPAL_NVP_USERNAME is not set".to_string()))
    }

    #[test]
    fn test_dry_run_works_without_credentials() {
        let cli = Cli::try_parse_from(checkout_args(true)).unwrap();

        let profile = resolve_profile(&cli.command, missing_credentials()).unwrap();
        assert_eq!(profile.username(), DRY_RUN_USER);
    }

    #[test]
    fn test_sending_requires_credentials() {
        let cli = Cli::try_parse_from(checkout_args(false)).unwrap();

        let err = resolve_profile(&cli.command, missing_credentials()).unwrap_err();
        assert!(format!("{:#}", err).contains("PAYPAL_NVP_USERNAME"));
    }

    #[test]
    fn test_configured_credentials_are_kept_for_dry_run() {
        let cli = Cli::try_parse_from(checkout_args(true)).unwrap();

        let profile =
            resolve_profile(&cli.command, Ok(BaseProfile::new("seller", "secret"))).unwrap();
        assert_eq!(profile.username(), "seller");
    }

    #[test]
    fn test_parse_checkout() {
        let cli = Cli::try_parse_from([
            "paypal-nvp-demo",
            "--sandbox",
            "checkout",
            "--item",
            "Mug:8.00:1.76",
            "--item",
            "Poster:24.00",
            "--shipping",
            "4.50",
            "--return-url",
            "https://shop.example.com/ok",
            "--cancel-url",
            "https://shop.example.com/ko",
            "--dry-run",
        ])
        .unwrap();

        assert!(cli.sandbox);
        match cli.command {
            Commands::Checkout {
                payment, dry_run, ..
            } => {
                assert!(dry_run);
                assert_eq!(payment.items.len(), 2);
                assert_eq!(payment.items[0].tax.as_deref(), Some("1.76"));
                assert_eq!(payment.shipping.as_deref(), Some("4.50"));
            }
            _ => panic!("expected checkout"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_item() {
        let result = Cli::try_parse_from([
            "paypal-nvp-demo",
            "checkout",
            "--item",
            "Mug",
            "--return-url",
            "https://shop.example.com/ok",
            "--cancel-url",
            "https://shop.example.com/ko",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_pay_action() {
        let cli = Cli::try_parse_from([
            "paypal-nvp-demo",
            "pay",
            "--token",
            "EC-12345678901234567",
            "--payer-id",
            "ABCDEFGHIJKLM",
            "--amount",
            "15.50",
        ])
        .unwrap();

        match cli.command {
            Commands::Pay {
                action, payment, ..
            } => {
                assert_eq!(action, PaymentAction::Sale);
                assert_eq!(payment.amount.as_deref(), Some("15.50"));
            }
            _ => panic!("expected pay"),
        }

        let result = Cli::try_parse_from([
            "paypal-nvp-demo",
            "pay",
            "--token",
            "EC-12345678901234567",
            "--payer-id",
            "ABCDEFGHIJKLM",
            "--action",
            "Refund",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "paypal-nvp-demo",
            "balance",
            "--all-currencies",
            "--no-api-signature",
            "--json",
        ])
        .unwrap();

        assert!(cli.no_api_signature);
        assert!(cli.json);
        assert!(!cli.gateway_config().api_signature);
        assert!(matches!(
            cli.command,
            Commands::Balance {
                all_currencies: true
            }
        ));
    }
}
