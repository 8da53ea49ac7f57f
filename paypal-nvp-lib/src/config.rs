//! Gateway selection and protocol settings.

use serde::{Deserialize, Serialize};

/// Protocol version sent as `VERSION` with every message.
pub const DEFAULT_VERSION: &str = "61.0";

/// Which gateway host to talk to and how.
///
/// # Example
///
/// ```
/// use paypal_nvp_lib::config::GatewayConfig;
///
/// let config = GatewayConfig::sandbox();
/// assert_eq!(config.endpoint_url(), "https://api-3t.sandbox.paypal.com/nvp");
///
/// let config = GatewayConfig::production().with_api_signature(false);
/// assert_eq!(config.endpoint_url(), "https://api.paypal.com/nvp");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Use the sandbox hosts instead of the live ones.
    #[serde(default)]
    pub sandbox: bool,

    /// Authenticate with an API signature (`api-3t.` host) rather than a
    /// client certificate (`api.` host).
    #[serde(default = "default_api_signature")]
    pub api_signature: bool,

    /// Protocol version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_signature() -> bool {
    true
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            sandbox: false,
            api_signature: default_api_signature(),
            version: default_version(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GatewayConfig {
    /// Live gateway with signature authentication.
    pub fn production() -> Self {
        Self::default()
    }

    /// Sandbox gateway with signature authentication.
    pub fn sandbox() -> Self {
        Self::default().with_sandbox(true)
    }

    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn with_api_signature(mut self, api_signature: bool) -> Self {
        self.api_signature = api_signature;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// `https://{api-3t|api}.{sandbox.}paypal.com/nvp`
    pub fn endpoint_url(&self) -> String {
        let host = if self.api_signature { "api-3t" } else { "api" };
        format!("https://{}.{}paypal.com/nvp", host, self.sandbox_segment())
    }

    /// Base URL the buyer is redirected to, without query.
    pub fn checkout_base_url(&self) -> String {
        format!(
            "https://www.{}paypal.com/cgi-bin/webscr",
            self.sandbox_segment()
        )
    }

    fn sandbox_segment(&self) -> &'static str {
        if self.sandbox {
            "sandbox."
        } else {
            ""
        }
    }
}

/// Load gateway settings from environment variables.
///
/// Every variable is optional; unset or unparseable values keep the
/// default.
/// - `PAYPAL_NVP_SANDBOX` - `true`/`false`
/// - `PAYPAL_NVP_API_SIGNATURE` - `true`/`false`
/// - `PAYPAL_NVP_VERSION` - protocol version
/// - `PAYPAL_NVP_TIMEOUT` - timeout in seconds
pub fn gateway_config_from_env() -> GatewayConfig {
    gateway_config_from_lookup(|name| std::env::var(name).ok())
}

/// Same as [`gateway_config_from_env`] with variables read through `lookup`.
///
/// Empty values count as unset.
pub fn gateway_config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GatewayConfig {
    let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
    let mut config = GatewayConfig::default();

    if let Some(sandbox) = var("PAYPAL_NVP_SANDBOX").and_then(|value| parse_flag(&value)) {
        config = config.with_sandbox(sandbox);
    }

    if let Some(api_signature) =
        var("PAYPAL_NVP_API_SIGNATURE").and_then(|value| parse_flag(&value))
    {
        config = config.with_api_signature(api_signature);
    }

    if let Some(version) = var("PAYPAL_NVP_VERSION") {
        config = config.with_version(version);
    }

    if let Some(secs) = var("PAYPAL_NVP_TIMEOUT").and_then(|value| value.trim().parse::<u64>().ok())
    {
        config = config.with_timeout(secs);
    }

    config
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
