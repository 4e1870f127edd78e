//! Parse history.
//!
//! Every distinct cookie string that was parsed is remembered, newest
//! first, up to a configurable limit.

use crate::base::settings::InspectorSettings;
use crate::cookies::compare::{CompareItem, CompareSource};
use crate::cookies::parsedcookie::ParsedCookie;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

/// One remembered parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub origin_cookie_string: String,
    pub parsed_cookies: Vec<ParsedCookie>,
}

impl HistoryEntry {
    pub fn new(origin_cookie_string: impl Into<String>, parsed_cookies: Vec<ParsedCookie>, now_ms: i64) -> Self {
        Self {
            id: now_ms.to_string(),
            timestamp: now_ms,
            origin_cookie_string: origin_cookie_string.into(),
            parsed_cookies,
        }
    }

    /// Case-insensitive match against the cookie string and row names/values.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.origin_cookie_string.to_lowercase().contains(&term)
            || rows_match(&self.parsed_cookies, &term)
    }
}

/// Row name/value search shared by history and saved entries.
/// `term` must already be lowercase.
pub(crate) fn rows_match(rows: &[ParsedCookie], term: &str) -> bool {
    rows.iter().any(|row| {
        row.name.to_lowercase().contains(term) || row.value.to_lowercase().contains(term)
    })
}

/// Render a millisecond timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
pub(crate) fn format_timestamp(ms: i64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .ok()
        .and_then(|t| t.format(format).ok())
        .unwrap_or_else(|| ms.to_string())
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

impl From<&HistoryEntry> for CompareItem {
    fn from(entry: &HistoryEntry) -> Self {
        CompareItem {
            id: entry.id.clone(),
            label: format!("History: {}", format_timestamp(entry.timestamp)),
            source: CompareSource::History,
            cookies: entry.parsed_cookies.clone(),
            origin_cookie_string: entry.origin_cookie_string.clone(),
        }
    }
}

/// Bounded, de-duplicated history, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieHistory {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for CookieHistory {
    fn default() -> Self {
        Self::new(&InspectorSettings::default())
    }
}

impl CookieHistory {
    pub fn new(settings: &InspectorSettings) -> Self {
        Self {
            entries: Vec::new(),
            limit: settings.history_limit,
        }
    }

    /// Rebuild from stored entries, applying the limit.
    pub fn from_entries(entries: Vec<HistoryEntry>, settings: &InspectorSettings) -> Self {
        let mut history = Self {
            entries,
            limit: settings.history_limit,
        };
        history.entries.truncate(history.limit);
        history
    }

    /// Remember a parse. Blank strings and strings already present are
    /// ignored. Returns whether an entry was added.
    pub fn record(&mut self, origin_cookie_string: &str, parsed_cookies: &[ParsedCookie], now_ms: i64) -> bool {
        if origin_cookie_string.trim().is_empty() {
            return false;
        }
        if self
            .entries
            .iter()
            .any(|e| e.origin_cookie_string == origin_cookie_string)
        {
            return false;
        }

        let mut entry = HistoryEntry::new(origin_cookie_string, parsed_cookies.to_vec(), now_ms);
        // Records within the same millisecond still get distinct ids.
        while self.get(&entry.id).is_some() {
            entry.id.push('_');
        }
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
        tracing::debug!(entries = self.entries.len(), limit = self.limit, "history entry recorded");
        true
    }

    /// Change the limit, dropping the oldest entries beyond it.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.entries.truncate(limit);
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries matching `term`; a blank term returns everything.
    pub fn search(&self, term: &str) -> Vec<&HistoryEntry> {
        if term.trim().is_empty() {
            return self.entries.iter().collect();
        }
        self.entries.iter().filter(|e| e.matches(term)).collect()
    }
}
