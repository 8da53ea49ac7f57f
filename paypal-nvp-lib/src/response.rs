//! Read helpers over decoded gateway responses.
//!
//! Responses stay flat string mappings; these functions only interpret
//! well-known keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fragment::{indexed_key, Fragment};

/// Value of the `ACK` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ack {
    Success,
    SuccessWithWarning,
    Failure,
    FailureWithWarning,
    /// Anything the gateway may add later.
    Other(String),
}

impl Ack {
    pub fn parse(value: &str) -> Self {
        match value {
            "Success" => Self::Success,
            "SuccessWithWarning" => Self::SuccessWithWarning,
            "Failure" => Self::Failure,
            "FailureWithWarning" => Self::FailureWithWarning,
            other => Self::Other(other.to_string()),
        }
    }

    /// True for `Success` and `SuccessWithWarning`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success | Self::SuccessWithWarning)
    }
}

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::SuccessWithWarning => f.write_str("SuccessWithWarning"),
            Self::Failure => f.write_str("Failure"),
            Self::FailureWithWarning => f.write_str("FailureWithWarning"),
            Self::Other(value) => f.write_str(value),
        }
    }
}

/// `ACK` of a response, if present.
pub fn ack(response: &Fragment) -> Option<Ack> {
    response.get("ACK").map(|value| Ack::parse(value))
}

/// Values of `base0`, `base1`, ... up to the first missing index.
///
/// ```
/// use paypal_nvp_lib::fragment::Fragment;
/// use paypal_nvp_lib::response::indexed_values;
///
/// let response = Fragment::from([
///     ("L_AMT0".to_string(), "10.00".to_string()),
///     ("L_AMT1".to_string(), "2.50".to_string()),
///     ("L_AMT3".to_string(), "9.99".to_string()),
/// ]);
/// assert_eq!(indexed_values(&response, "L_AMT"), vec!["10.00", "2.50"]);
/// ```
pub fn indexed_values(response: &Fragment, base: &str) -> Vec<String> {
    (0..)
        .map_while(|index| response.get(&indexed_key(base, index)).cloned())
        .collect()
}

/// One entry of the `L_ERRORCODEn` family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayError {
    pub code: String,
    pub short_message: String,
    pub long_message: String,
    pub severity: String,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.short_message)?;
        if !self.long_message.is_empty() && self.long_message != self.short_message {
            write!(f, ": {}", self.long_message)?;
        }
        Ok(())
    }
}

/// Errors and warnings reported in a response, in index order.
pub fn gateway_errors(response: &Fragment) -> Vec<GatewayError> {
    let field = |base: &str, index: usize| {
        response
            .get(&indexed_key(base, index))
            .cloned()
            .unwrap_or_default()
    };

    (0..)
        .map_while(|index| {
            response
                .get(&indexed_key("L_ERRORCODE", index))
                .map(|code| GatewayError {
                    code: code.clone(),
                    short_message: field("L_SHORTMESSAGE", index),
                    long_message: field("L_LONGMESSAGE", index),
                    severity: field("L_SEVERITYCODE", index),
                })
        })
        .collect()
}
