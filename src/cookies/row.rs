//! Single-segment codec: `name=value` to [`ParsedCookie`] and back.

use crate::cookies::parsedcookie::ParsedCookie;

/// Decode one `;`-delimited segment.
///
/// The segment is trimmed, then split on its first `=`. A segment without
/// `=` is a name with an empty value. The id is derived from
/// `position_index`, the segment's split index.
pub fn decode_row(segment: &str, position_index: usize) -> ParsedCookie {
    let segment = segment.trim();
    let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
    ParsedCookie::new(ParsedCookie::row_id(position_index), name, value)
}

/// Encode a row as `name=value`.
pub fn encode_row(row: &ParsedCookie) -> String {
    format!("{}={}", row.name, row.value)
}
