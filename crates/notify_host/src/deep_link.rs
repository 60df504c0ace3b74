//! Pure deep-link parsing and generation helpers shared across host abstractions.
//!
//! The bridge treats deep links as opaque strings; these helpers give callers a structured view
//! of the app's own `notifyapp://screen/key=value/...` scheme without changing that contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// URL scheme prefix recognized by [`parse_deep_link`].
pub const DEEP_LINK_SCHEME: &str = "notifyapp://";

/// Structured navigation target decoded from a deep-link string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkTarget {
    /// Destination screen name.
    pub screen: String,
    /// Decoded key/value parameters.
    pub params: BTreeMap<String, String>,
}

/// Parses a deep-link string into a navigation target.
///
/// Accepts `notifyapp://screen/key=value/...` (values percent-decoded) and bare screen names
/// without a scheme. Foreign schemes, empty input, and scheme-only input return `None`.
pub fn parse_deep_link(raw: &str) -> Option<DeepLinkTarget> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix(DEEP_LINK_SCHEME) {
        let mut segments = rest.split('/');
        let screen = segments.next().unwrap_or_default();
        if screen.is_empty() {
            return None;
        }

        let mut params = BTreeMap::new();
        for segment in segments {
            if let Some((key, value)) = segment.split_once('=') {
                if !key.is_empty() && !value.is_empty() {
                    params.insert(key.to_string(), decode_component(value));
                }
            }
        }
        return Some(DeepLinkTarget {
            screen: screen.to_string(),
            params,
        });
    }

    if trimmed.contains("://") {
        return None;
    }

    Some(DeepLinkTarget {
        screen: trimmed.to_string(),
        params: BTreeMap::new(),
    })
}

/// Generates a deep-link string for a screen and parameter list.
///
/// Parameter values are percent-encoded; keys are expected to be plain identifiers.
pub fn generate_deep_link(screen: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{DEEP_LINK_SCHEME}{screen}");
    for (key, value) in params {
        url.push('/');
        url.push_str(key);
        url.push('=');
        url.push_str(&encode_component(value));
    }
    url
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push_str(&format!("{byte:02X}"));
        }
    }
    out
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}

fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
