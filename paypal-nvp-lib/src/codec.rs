//! NVP wire encoding.
//!
//! Outbound messages are `application/x-www-form-urlencoded`: `KEY=value`
//! pairs joined by `&`, each part percent-encoded as UTF-8. Inbound
//! messages share the shape but are decoded as a whole before splitting.

use std::borrow::Cow;

use crate::fragment::Fragment;

/// Encodes one fragment as `KEY=value&KEY=value`.
pub fn encode_fragment(fragment: &Fragment) -> String {
    fragment
        .iter()
        .map(|(key, value)| encode_pair(key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Encodes a complete message: credentials first, then the request fields,
/// then `VERSION`.
///
/// ```
/// use paypal_nvp_lib::codec::encode_message;
/// use paypal_nvp_lib::fragment::Fragment;
///
/// let profile = Fragment::from([("USER".to_string(), "seller".to_string())]);
/// let request = Fragment::from([("METHOD".to_string(), "GetBalance".to_string())]);
///
/// assert_eq!(
///     encode_message(&profile, &request, "61.0"),
///     "USER=seller&METHOD=GetBalance&VERSION=61.0"
/// );
/// ```
pub fn encode_message(profile: &Fragment, request: &Fragment, version: &str) -> String {
    [
        encode_fragment(profile),
        encode_fragment(request),
        encode_pair("VERSION", version),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join("&")
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}

/// Decodes a raw gateway response into a flat mapping.
///
/// The whole body is percent-decoded first, then split on `&` and each
/// piece on its first `=`. A piece without `=` maps to an empty value,
/// and a later duplicate key replaces an earlier one.
///
/// ```
/// use paypal_nvp_lib::codec::decode_response;
///
/// let response = decode_response("ACK=Success&TOKEN=EC%2D123&NOTE=a%3Db");
/// assert_eq!(response["ACK"], "Success");
/// assert_eq!(response["TOKEN"], "EC-123");
/// assert_eq!(response["NOTE"], "a=b");
/// ```
pub fn decode_response(body: &str) -> Fragment {
    let decoded = percent_decode(body.trim());

    decoded
        .split('&')
        .filter(|piece| !piece.is_empty())
        .map(|piece| match piece.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (piece.to_string(), String::new()),
        })
        .collect()
}

/// Invalid UTF-8 sequences become U+FFFD instead of failing the decode.
fn percent_decode(body: &str) -> Cow<'_, str> {
    match urlencoding::decode(body) {
        Ok(decoded) => decoded,
        Err(_) => {
            let bytes = urlencoding::decode_binary(body.as_bytes());
            Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
