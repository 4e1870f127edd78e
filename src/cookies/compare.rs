//! Name-keyed comparison of two cookie snapshots.

use crate::cookies::parsedcookie::ParsedCookie;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome for one cookie name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResult {
    pub name: String,
    /// Value on the left side, empty when absent.
    pub left_value: String,
    /// Value on the right side, empty when absent.
    pub right_value: String,
    pub is_different: bool,
}

/// Where a compared snapshot comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareSource {
    Current,
    History,
    Saved,
}

/// A snapshot offered for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareItem {
    pub id: String,
    pub label: String,
    pub source: CompareSource,
    pub cookies: Vec<ParsedCookie>,
    pub origin_cookie_string: String,
}

impl CompareItem {
    /// The live workspace snapshot.
    pub fn current(origin_cookie_string: impl Into<String>, cookies: Vec<ParsedCookie>) -> Self {
        Self {
            id: "current".to_string(),
            label: "Current Cookies".to_string(),
            source: CompareSource::Current,
            cookies,
            origin_cookie_string: origin_cookie_string.into(),
        }
    }
}

/// Compare two row lists by cookie name.
///
/// Names are visited left side first, then names only present on the
/// right, each in row order. Duplicate names resolve to their first row.
/// A name is different when only one side has it or the flat values differ;
/// sub-value structure is not compared separately.
pub fn compare(left: &[ParsedCookie], right: &[ParsedCookie]) -> Vec<CompareResult> {
    let mut seen = HashSet::new();
    let names: Vec<&str> = left
        .iter()
        .chain(right.iter())
        .map(|cookie| cookie.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect();

    names
        .into_iter()
        .map(|name| {
            let left_cookie = left.iter().find(|c| c.name == name);
            let right_cookie = right.iter().find(|c| c.name == name);

            let is_different = match (left_cookie, right_cookie) {
                (Some(l), Some(r)) => l.value != r.value,
                _ => true,
            };

            CompareResult {
                name: name.to_string(),
                left_value: left_cookie.map(|c| c.value.clone()).unwrap_or_default(),
                right_value: right_cookie.map(|c| c.value.clone()).unwrap_or_default(),
                is_different,
            }
        })
        .collect()
}

/// Compare two optional snapshots; empty unless both sides are chosen.
pub fn compare_items(left: Option<&CompareItem>, right: Option<&CompareItem>) -> Vec<CompareResult> {
    match (left, right) {
        (Some(l), Some(r)) => compare(&l.cookies, &r.cookies),
        _ => Vec::new(),
    }
}

/// Number of names whose values differ.
pub fn difference_count(results: &[CompareResult]) -> usize {
    results.iter().filter(|r| r.is_different).count()
}
