//! Merchant API credentials.

use std::fmt;

use crate::fragment::{insert, Fragment};
use crate::{NvpError, Result};

/// Source of the credential fields placed at the front of every message.
pub trait Profile {
    /// Returns an independent snapshot of `USER`, `PWD` and the optional
    /// `SIGNATURE` / `SUBJECT` fields.
    fn nvp_fragment(&self) -> Fragment;
}

/// Username/password credentials with optional signature and subject.
///
/// # Example
///
/// ```
/// use paypal_nvp_lib::profile::{BaseProfile, Profile};
///
/// let mut profile = BaseProfile::new("seller_api1.example.com", "secret");
/// profile.set_signature("A1b2C3");
///
/// let fields = profile.nvp_fragment();
/// assert_eq!(fields["USER"], "seller_api1.example.com");
/// assert_eq!(fields["SIGNATURE"], "A1b2C3");
/// assert!(!fields.contains_key("SUBJECT"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BaseProfile {
    username: String,
    password: String,
    signature: Option<String>,
    subject: Option<String>,
}

impl BaseProfile {
    /// Create a profile from the API username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            signature: None,
            subject: None,
        }
    }

    /// API signature. Leave unset when authenticating with a certificate.
    pub fn set_signature(&mut self, signature: impl Into<String>) {
        self.signature = Some(signature.into());
    }

    /// Email of the account that granted permission to call on its behalf.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = Some(subject.into());
    }

    /// Builder form of [`Self::set_signature`].
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.set_signature(signature);
        self
    }

    /// Builder form of [`Self::set_subject`].
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.set_subject(subject);
        self
    }

    /// API username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether a signature is configured.
    pub fn has_signature(&self) -> bool {
        self.signature.is_some()
    }
}

impl Profile for BaseProfile {
    fn nvp_fragment(&self) -> Fragment {
        let mut fragment = Fragment::new();
        insert(&mut fragment, "USER", self.username.as_str());
        insert(&mut fragment, "PWD", self.password.as_str());
        if let Some(signature) = &self.signature {
            insert(&mut fragment, "SIGNATURE", signature.as_str());
        }
        if let Some(subject) = &self.subject {
            insert(&mut fragment, "SUBJECT", subject.as_str());
        }
        fragment
    }
}

impl fmt::Debug for BaseProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseProfile")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("signature", &self.signature.as_ref().map(|_| "<redacted>"))
            .field("subject", &self.subject)
            .finish()
    }
}

/// Load credentials from environment variables.
///
/// Required variables:
/// - `PAYPAL_NVP_USERNAME` - API username
/// - `PAYPAL_NVP_PASSWORD` - API password
///
/// Optional variables:
/// - `PAYPAL_NVP_SIGNATURE` - API signature
/// - `PAYPAL_NVP_SUBJECT` - Third-party account email
pub fn profile_from_env() -> Result<BaseProfile> {
    profile_from_lookup(|name| std::env::var(name).ok())
}

/// Same as [`profile_from_env`] with variables read through `lookup`.
///
/// Empty values count as unset.
pub fn profile_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<BaseProfile> {
    let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
    let required = |name: &str| {
        var(name).ok_or_else(|| NvpError::Config(format!("{} is not set", name)))
    };

    let mut profile = BaseProfile::new(
        required("PAYPAL_NVP_USERNAME")?,
        required("PAYPAL_NVP_PASSWORD")?,
    );

    if let Some(signature) = var("PAYPAL_NVP_SIGNATURE") {
        profile.set_signature(signature);
    }

    if let Some(subject) = var("PAYPAL_NVP_SUBJECT") {
        profile.set_subject(subject);
    }

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_lookup_requires_username() {
        let err = profile_from_lookup(lookup(&[("PAYPAL_NVP_PASSWORD", "pass")])).unwrap_err();
        assert_eq!(err.code(), crate::NvpErrorCode::Config);
        assert!(err.to_string().contains("PAYPAL_NVP_USERNAME"));
    }

    #[test]
    fn test_lookup_requires_password() {
        let err = profile_from_lookup(lookup(&[("PAYPAL_NVP_USERNAME", "user")])).unwrap_err();
        assert!(
            matches!(err, NvpError::Config(ref message) if message.contains("PAYPAL_NVP_PASSWORD"))
        );
    }

    #[test]
    fn test_lookup_treats_empty_as_unset() {
        let err = profile_from_lookup(lookup(&[
            ("PAYPAL_NVP_USERNAME", ""),
            ("PAYPAL_NVP_PASSWORD", "pass"),
        ]))
        .unwrap_err();
        assert!(matches!(err, NvpError::Config(_)));

        let profile = profile_from_lookup(lookup(&[
            ("PAYPAL_NVP_USERNAME", "user"),
            ("PAYPAL_NVP_PASSWORD", "pass"),
            ("PAYPAL_NVP_SIGNATURE", ""),
        ]))
        .unwrap();
        assert!(!profile.has_signature());
        assert!(!profile.nvp_fragment().contains_key("SIGNATURE"));
    }

    #[test]
    fn test_lookup_reads_optional_fields() {
        let profile = profile_from_lookup(lookup(&[
            ("PAYPAL_NVP_USERNAME", "seller_api1.example.com"),
            ("PAYPAL_NVP_PASSWORD", "pass"),
            ("PAYPAL_NVP_SIGNATURE", "sig"),
            ("PAYPAL_NVP_SUBJECT", "owner@example.com"),
        ]))
        .unwrap();

        let fields = profile.nvp_fragment();
        assert_eq!(fields["USER"], "seller_api1.example.com");
        assert_eq!(fields["PWD"], "pass");
        assert_eq!(fields["SIGNATURE"], "sig");
        assert_eq!(fields["SUBJECT"], "owner@example.com");
    }

    #[test]
    fn test_minimal_profile_fragment() {
        let profile = BaseProfile::new("user", "pass");
        let fields = profile.nvp_fragment();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["USER"], "user");
        assert_eq!(fields["PWD"], "pass");
    }

    #[test]
    fn test_optional_fields() {
        let profile = BaseProfile::new("user", "pass")
            .with_signature("sig")
            .with_subject("owner@example.com");
        let fields = profile.nvp_fragment();

        assert_eq!(fields["SIGNATURE"], "sig");
        assert_eq!(fields["SUBJECT"], "owner@example.com");
        assert!(profile.has_signature());
    }

    #[test]
    fn test_fragment_is_a_snapshot() {
        let profile = BaseProfile::new("user", "pass");
        let mut first = profile.nvp_fragment();
        first.insert("USER".to_string(), "changed".to_string());

        assert_eq!(profile.nvp_fragment()["USER"], "user");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let profile = BaseProfile::new("user", "hunter2").with_signature("topsecret");
        let debug = format!("{:?}", profile);

        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("topsecret"));
    }
}
