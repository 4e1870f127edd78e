//! Cookie string parsing, type inference, editing and comparison.
//!
//! This module turns a flat `name=value; name=value` string into an
//! editable row list and back, without losing information on the way.
//!
//! # Architecture
//!
//! | Layer | Module | Responsibility |
//! |-------|--------|----------------|
//! | Type inference | [`classifier`] | Ordered rule cascade producing a [`CookieType`](cookietype::CookieType) |
//! | Sub-values | [`subvalue`] | `a=1&b=2` structure inside one cookie value |
//! | Row | [`row`] | One `name=value` segment |
//! | Cookie string | [`cookiestring`] | Whole string parse/serialize, selection, append |
//! | Edits | [`mutation`] | Pure row-list edits |
//! | Diff | [`compare`] | Name-keyed comparison of two snapshots |
//!
//! # Example
//!
//! ```rust
//! use cookieinspect::cookies::cookiestring::{parse, serialize};
//! use cookieinspect::cookies::cookietype::CookieType;
//! use cookieinspect::cookies::mutation::update_row_value;
//!
//! let rows = parse("sid=550e8400-e29b-41d4-a716-446655440000; prefs=lang=en&theme=dark");
//! assert_eq!(rows[0].cookie_type, CookieType::Uuid);
//! assert_eq!(rows[1].sub_values.len(), 2);
//!
//! let rows = update_row_value(&rows, "row-0", "expired", None);
//! assert_eq!(serialize(&rows), "sid=expired;prefs=lang=en&theme=dark");
//! ```
//!
//! # Row ids
//!
//! Ids are `row-<index>` where `index` is the segment's position in the
//! split string. They are handles for the current list only: any edit that
//! re-parses (a value containing `;`) renumbers them.

pub mod classifier;
pub mod compare;
pub mod cookiestring;
pub mod cookietype;
pub mod mutation;
pub mod parsedcookie;
pub mod row;
pub mod subvalue;
