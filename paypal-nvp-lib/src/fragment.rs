//! Name-value fragments and the indexed field group encoding.
//!
//! Every domain object contributes a [`Fragment`]: a mapping from gateway
//! field name to an already formatted value. Lists are flattened onto the
//! same key space with a zero-based positional suffix (`L_NAME0`,
//! `L_NAME1`, ...), see [`append_indexed`].

use std::collections::BTreeMap;

/// Field name to gateway-formatted value.
///
/// Ordered so that encoded messages are deterministic; the gateway itself
/// does not care about order.
pub type Fragment = BTreeMap<String, String>;

/// Capability shared by everything that contributes fields to a request.
pub trait NvpFields {
    /// Returns an independent snapshot of the accumulated fields.
    ///
    /// Mutating the returned value never affects `self`.
    fn nvp_fragment(&self) -> Fragment;
}

/// Copies every field of `group[n]` into `target` as `KEYn`.
///
/// Indices start at zero and follow iteration order, so the emitted
/// suffixes are contiguous.
///
/// ```
/// use paypal_nvp_lib::fragment::{append_indexed, Fragment};
///
/// let first = Fragment::from([("L_NAME".to_string(), "Cup".to_string())]);
/// let second = Fragment::from([("L_NAME".to_string(), "Jar".to_string())]);
///
/// let mut message = Fragment::new();
/// append_indexed(&mut message, [&first, &second]);
///
/// assert_eq!(message["L_NAME0"], "Cup");
/// assert_eq!(message["L_NAME1"], "Jar");
/// ```
pub fn append_indexed<'a, I>(target: &mut Fragment, group: I)
where
    I: IntoIterator<Item = &'a Fragment>,
{
    for (index, fragment) in group.into_iter().enumerate() {
        for (key, value) in fragment {
            target.insert(indexed_key(key, index), value.clone());
        }
    }
}

/// `BASE` + `index`, e.g. `L_AMT3`.
pub fn indexed_key(base: &str, index: usize) -> String {
    format!("{}{}", base, index)
}

pub(crate) fn insert(fragment: &mut Fragment, key: &str, value: impl Into<String>) {
    fragment.insert(key.to_string(), value.into());
}

pub(crate) fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

pub(crate) fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
