//! Row-list edits.
//!
//! Every operation takes the current rows by reference and returns a new
//! list. Derived fields of the touched row (type and sub-values) are
//! recomputed on every edit. An id or index that no longer matches the
//! data is a no-op, so a stale handle from the UI never fails.
//!
//! Row ids are positional (`row-<index>` at parse time). Any edit that falls
//! back to a full re-parse renumbers them, so callers must re-read ids from
//! the returned list.

use crate::cookies::classifier::classify;
use crate::cookies::cookiestring::{parse, serialize};
use crate::cookies::parsedcookie::{ParsedCookie, SubParsedCookie};
use crate::cookies::subvalue::{decode_value, encode};

fn position(rows: &[ParsedCookie], id: &str) -> Option<usize> {
    rows.iter().position(|row| row.id == id)
}

/// Replace the value (and optionally the name) of the row with `id`.
///
/// A new value containing `;` splits into several segments, so the whole
/// list is serialized and re-parsed; ids of the result are fresh.
pub fn update_row_value(
    rows: &[ParsedCookie],
    id: &str,
    new_value: &str,
    new_name: Option<&str>,
) -> Vec<ParsedCookie> {
    let Some(index) = position(rows, id) else {
        tracing::debug!(id, "update_row_value: no such row");
        return rows.to_vec();
    };

    let name = new_name.unwrap_or(rows[index].name.as_str());
    let edited = ParsedCookie::new(rows[index].id.clone(), name, new_value);

    let mut result = rows.to_vec();
    result[index] = edited;

    if new_value.contains(';') {
        tracing::debug!(id, "edited value contains ';', re-parsing row list");
        return parse(&serialize(&result));
    }
    result
}

/// Replace the value of sub-value `sub_index` in the row with `row_id`.
///
/// The parent row's value is re-encoded from its sub-values. If the new
/// text contains `&` the sub-values are re-decoded, which may add pairs.
/// Pairs left with neither name nor value are dropped, and fewer than two
/// remaining pairs collapse back into the plain row value.
pub fn update_sub_value(
    rows: &[ParsedCookie],
    row_id: &str,
    sub_index: usize,
    new_sub_value: &str,
) -> Vec<ParsedCookie> {
    let Some(index) = position(rows, row_id) else {
        tracing::debug!(row_id, "update_sub_value: no such row");
        return rows.to_vec();
    };
    let row = &rows[index];
    if sub_index >= row.sub_values.len() {
        tracing::debug!(row_id, sub_index, "update_sub_value: no such sub-value");
        return rows.to_vec();
    }

    let mut sub_values = row.sub_values.clone();
    sub_values[sub_index] = SubParsedCookie::new(sub_values[sub_index].name.clone(), new_sub_value);

    if new_sub_value.contains('&') {
        sub_values = decode_value(&encode(&sub_values));
    }
    sub_values.retain(|sub| !sub.is_empty());

    let mut result = rows.to_vec();
    result[index] = rebuild_from_sub_values(row, sub_values);
    result
}

/// Remove the row with `id`. Other rows keep their ids.
pub fn delete_row(rows: &[ParsedCookie], id: &str) -> Vec<ParsedCookie> {
    if position(rows, id).is_none() {
        tracing::debug!(id, "delete_row: no such row");
        return rows.to_vec();
    }
    rows.iter().filter(|row| row.id != id).cloned().collect()
}

/// Remove sub-value `sub_index` from the row with `row_id`.
///
/// When a single pair remains it is collapsed into the row's plain value
/// (`key=value`) and the sub-value list is cleared in the same step.
pub fn delete_sub_value(rows: &[ParsedCookie], row_id: &str, sub_index: usize) -> Vec<ParsedCookie> {
    let Some(index) = position(rows, row_id) else {
        tracing::debug!(row_id, "delete_sub_value: no such row");
        return rows.to_vec();
    };
    let row = &rows[index];
    if sub_index >= row.sub_values.len() {
        tracing::debug!(row_id, sub_index, "delete_sub_value: no such sub-value");
        return rows.to_vec();
    }

    let mut sub_values = row.sub_values.clone();
    sub_values.remove(sub_index);

    let mut result = rows.to_vec();
    result[index] = rebuild_from_sub_values(row, sub_values);
    result
}

fn rebuild_from_sub_values(row: &ParsedCookie, sub_values: Vec<SubParsedCookie>) -> ParsedCookie {
    let value = encode(&sub_values);
    let sub_values = if sub_values.len() < 2 {
        Vec::new()
    } else {
        sub_values
    };
    ParsedCookie {
        id: row.id.clone(),
        name: row.name.clone(),
        cookie_type: classify(&value),
        value,
        sub_values,
    }
}
