//! Ampersand sub-value codec.
//!
//! A cookie value such as `lang=en&theme=dark` carries its own `key=value`
//! structure. Decoding exposes those pairs; encoding joins them back.
//! A single pair is never treated as sub-structure: it stays the row's own
//! value and decodes to an empty list.

use crate::cookies::parsedcookie::SubParsedCookie;

/// Decode the sub-values of a raw `name=value` segment.
///
/// Only the part after the first `=` is inspected, so ampersands in the
/// name never produce sub-values.
pub fn decode(segment: &str) -> Vec<SubParsedCookie> {
    match segment.split_once('=') {
        Some((_, value)) => decode_value(value),
        None => Vec::new(),
    }
}

/// Decode the sub-values of a cookie value.
///
/// Pieces split on their first `=`; a piece without `=` becomes a name with
/// an empty value, and pieces with an empty name are discarded. Fewer than
/// two surviving pairs yield an empty list.
pub fn decode_value(value: &str) -> Vec<SubParsedCookie> {
    if !value.contains('&') {
        return Vec::new();
    }

    let pairs: Vec<SubParsedCookie> = value
        .split('&')
        .map(|piece| match piece.split_once('=') {
            Some((name, value)) => SubParsedCookie::new(name, value),
            None => SubParsedCookie::new(piece, ""),
        })
        .filter(|pair| !pair.name.is_empty())
        .collect();

    if pairs.len() < 2 {
        return Vec::new();
    }
    pairs
}

/// Join sub-values as `name=value` pairs separated by `&`, in order.
pub fn encode(sub_values: &[SubParsedCookie]) -> String {
    sub_values
        .iter()
        .map(|sub| format!("{}={}", sub.name, sub.value))
        .collect::<Vec<_>>()
        .join("&")
}
