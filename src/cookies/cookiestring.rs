//! Whole cookie string codec.
//!
//! The origin cookie string is the source of truth; the row list is a view
//! regenerated from it on every parse. Row order follows segment order.

use crate::cookies::parsedcookie::ParsedCookie;
use crate::cookies::row::{decode_row, encode_row};

/// Parse a `name=value; name=value` string into rows.
///
/// Segments are split on `;` and trimmed. Segments with neither name nor
/// value (doubled or trailing semicolons, blank input) are dropped, but the
/// surviving rows keep the id of their original split index.
pub fn parse(cookie_string: &str) -> Vec<ParsedCookie> {
    let cookie_string = cookie_string.trim();
    if cookie_string.is_empty() {
        return Vec::new();
    }

    let segments: Vec<&str> = cookie_string.split(';').collect();
    let rows: Vec<ParsedCookie> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| decode_row(segment, index))
        .filter(|row| !row.is_empty())
        .collect();

    tracing::debug!(
        segments = segments.len(),
        rows = rows.len(),
        "parsed cookie string"
    );
    rows
}

/// Serialize rows back to a cookie string.
///
/// Rows are joined with a bare `;` (no space).
pub fn serialize(rows: &[ParsedCookie]) -> String {
    rows.iter().map(encode_row).collect::<Vec<_>>().join(";")
}

/// Rows whose id is in `selected_ids`, in row order.
///
/// An empty selection selects every row.
pub fn select_rows(rows: &[ParsedCookie], selected_ids: &[String]) -> Vec<ParsedCookie> {
    if selected_ids.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| selected_ids.contains(&row.id))
        .cloned()
        .collect()
}

/// Cookie string of the selected rows (all rows for an empty selection).
pub fn selected_cookie_string(rows: &[ParsedCookie], selected_ids: &[String]) -> String {
    serialize(&select_rows(rows, selected_ids))
}

/// Append `extra` to `current`, separated by `;`.
///
/// A blank side yields the other side unchanged.
pub fn append_cookie_string(current: &str, extra: &str) -> String {
    let current_trimmed = current.trim_end().trim_end_matches(';');
    if current_trimmed.trim().is_empty() {
        return extra.to_string();
    }
    if extra.trim().is_empty() {
        return current.to_string();
    }
    format!("{};{}", current_trimmed, extra.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(rows: &[ParsedCookie]) -> Vec<(String, String)> {
        rows.iter()
            .map(|r| (r.name.clone(), r.value.clone()))
            .collect()
    }

    #[test]
    fn test_parse_basic() {
        let rows = parse("a=1;b=2");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "a");
        assert_eq!(rows[0].value, "1");
        assert_eq!(rows[1].name, "b");
        assert_eq!(rows[1].value, "2");
        assert!(rows.iter().all(|r| r.sub_values.is_empty()));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
        assert!(parse(";;;").is_empty());
    }

    #[test]
    fn test_parse_drops_ghost_rows_keeps_ids() {
        let rows = parse("a=1;;b=2;");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "row-0");
        assert_eq!(rows[1].id, "row-2");
    }

    #[test]
    fn test_parse_trims_segments() {
        let rows = parse(" a=1;  b=2 ");
        assert_eq!(
            pairs(&rows),
            vec![("a".into(), "1".into()), ("b".into(), "2".into())]
        );
    }

    #[test]
    fn test_serialize_no_space() {
        let rows = parse("a=1; b=2; d=");
        assert_eq!(serialize(&rows), "a=1;b=2;d=");
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_roundtrip() {
        let input = "a=1; b=2&c=3; d=; flag; =anon; nested=x=1&y=2";
        let rows = parse(input);
        assert_eq!(pairs(&parse(&serialize(&rows))), pairs(&rows));
    }

    #[test]
    fn test_select_rows() {
        let rows = parse("a=1;b=2;c=3");
        assert_eq!(select_rows(&rows, &[]).len(), 3);

        let picked = select_rows(&rows, &["row-2".to_string(), "row-0".to_string()]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].name, "a");
        assert_eq!(picked[1].name, "c");
        assert_eq!(
            selected_cookie_string(&rows, &["row-1".to_string()]),
            "b=2"
        );
    }

    #[test]
    fn test_append() {
        assert_eq!(append_cookie_string("a=1", "b=2"), "a=1;b=2");
        assert_eq!(append_cookie_string("a=1; ", "b=2"), "a=1;b=2");
        assert_eq!(append_cookie_string("", "b=2"), "b=2");
        assert_eq!(append_cookie_string("a=1", "  "), "a=1");
    }
}
