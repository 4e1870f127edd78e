//! # cookieinspect
//!
//! Parse, edit and compare HTTP cookie strings.
//!
//! `cookieinspect` converts a raw `Cookie`-header style string into a list of
//! typed rows, lets callers edit those rows (including `a=1&b=2` sub-values
//! nested in a single cookie), and serializes the result back without losing
//! information.
//!
//! ## Features
//!
//! - **Round-trip parsing**: `parse(serialize(rows))` reproduces the rows
//! - **Type inference**: email, uuid, hex colour, boolean, timestamp, json,
//!   image data URI, url, md5/sha1/sha256, phone, number, date
//! - **Sub-values**: ampersand groups inside a value are decoded and editable
//! - **Pure edits**: every mutation returns a new row list
//! - **Comparison**: name-keyed diff of two snapshots
//! - **History & saved entries**: bounded history, tagged snapshots, JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use cookieinspect::cookies::compare::compare;
//! use cookieinspect::cookies::cookiestring::parse;
//!
//! let before = parse("a=1; b=2");
//! let after = parse("a=1; b=3; c=4");
//!
//! let diff = compare(&before, &after);
//! assert_eq!(diff.iter().filter(|r| r.is_different).count(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error type and settings
//! - [`cookies`] - Parsing, classification, edits and comparison
//! - [`session`] - Inspector state, history, saved entries, persistence

pub mod base;
pub mod cookies;
pub mod session;
