//! Row-list edit integration tests.

use cookieinspect::cookies::cookiestring::{parse, serialize};
use cookieinspect::cookies::cookietype::CookieType;
use cookieinspect::cookies::mutation::{
    delete_row, delete_sub_value, update_row_value, update_sub_value,
};

#[test]
fn test_stale_ids_are_noops() {
    let rows = parse("a=1;b=x=1&y=2");
    assert_eq!(delete_row(&rows, "nonexistent"), rows);
    assert_eq!(update_row_value(&rows, "row-7", "v", None), rows);
    assert_eq!(update_sub_value(&rows, "row-1", 2, "v"), rows);
    assert_eq!(update_sub_value(&rows, "row-0", 0, "v"), rows);
    assert_eq!(delete_sub_value(&rows, "row-1", 9), rows);
    assert_eq!(delete_sub_value(&rows, "nope", 0), rows);
}

#[test]
fn test_semicolon_edit_grows_list() {
    let rows = parse("a=1;b=2");
    let updated = update_row_value(&rows, "row-1", "2;c=3;d=4", None);
    assert_eq!(updated.len(), rows.len() + 2);
    assert_eq!(serialize(&updated), "a=1;b=2;c=3;d=4");
    let ids: Vec<&str> = updated.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["row-0", "row-1", "row-2", "row-3"]);
}

#[test]
fn test_row_edit_then_sub_edit() {
    let rows = parse("session=abc");
    let rows = update_row_value(&rows, "row-0", "uid=42&role=admin", None);
    assert_eq!(rows[0].sub_values.len(), 2);
    assert_eq!(rows[0].sub_values[0].cookie_type, CookieType::Number);

    let rows = update_sub_value(&rows, "row-0", 1, "user@example.com");
    assert_eq!(rows[0].value, "uid=42&role=user@example.com");
    assert_eq!(rows[0].sub_values[1].cookie_type, CookieType::Email);
}

#[test]
fn test_sub_edit_clearing_value_keeps_pair() {
    let rows = parse("p=x=1&y=2");
    let rows = update_sub_value(&rows, "row-0", 0, "");
    assert_eq!(rows[0].value, "x=&y=2");
    assert_eq!(rows[0].sub_values.len(), 2);
    assert_eq!(rows[0].sub_values[0].value, "");
}

#[test]
fn test_sub_edit_with_dangling_ampersand() {
    let rows = parse("p=x=1&y=2");
    let rows = update_sub_value(&rows, "row-0", 1, "2&");
    assert_eq!(rows[0].value, "x=1&y=2");
    assert_eq!(rows[0].sub_values.len(), 2);
}

#[test]
fn test_delete_sub_value_collapse_then_reparse_agrees() {
    let rows = parse("p=x=1&y=2");
    let collapsed = delete_sub_value(&rows, "row-0", 1);
    assert_eq!(collapsed[0].value, "x=1");
    assert!(collapsed[0].sub_values.is_empty());

    // The collapsed row is what a fresh parse of the new string produces.
    let reparsed = parse(&serialize(&collapsed));
    assert_eq!(reparsed, collapsed);
}

#[test]
fn test_edits_do_not_touch_input() {
    let rows = parse("a=1;b=2");
    let snapshot = rows.clone();
    let _ = update_row_value(&rows, "row-0", "9", None);
    let _ = delete_row(&rows, "row-1");
    assert_eq!(rows, snapshot);
}

#[test]
fn test_delete_row_ids_not_renumbered() {
    let rows = parse("a=1;b=2;c=3");
    let rows = delete_row(&rows, "row-0");
    assert_eq!(rows[0].id, "row-1");
    let rows = delete_row(&rows, "row-0");
    assert_eq!(rows.len(), 2);
}
