//! Named, tagged cookie snapshots kept by the user.

use crate::base::cookieerror::{CookieError, Result};
use crate::cookies::compare::{CompareItem, CompareSource};
use crate::cookies::parsedcookie::ParsedCookie;
use crate::session::history::rows_match;
use serde::{Deserialize, Serialize};

/// A saved snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEntry {
    pub id: String,
    pub name: String,
    pub origin_cookie_string: String,
    pub parsed_cookies: Vec<ParsedCookie>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl SavedEntry {
    /// Case-insensitive match against name, tags, description, the cookie
    /// string and row names/values.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&term))
            || self.description.to_lowercase().contains(&term)
            || self.origin_cookie_string.to_lowercase().contains(&term)
            || rows_match(&self.parsed_cookies, &term)
    }
}

impl From<&SavedEntry> for CompareItem {
    fn from(entry: &SavedEntry) -> Self {
        CompareItem {
            id: entry.id.clone(),
            label: format!("Saved: {}", entry.name),
            source: CompareSource::Saved,
            cookies: entry.parsed_cookies.clone(),
            origin_cookie_string: entry.origin_cookie_string.clone(),
        }
    }
}

/// Replacement fields for [`SavedCookies::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedEdit {
    pub name: String,
    pub tags: Vec<String>,
    pub description: String,
    pub origin_cookie_string: String,
    pub parsed_cookies: Vec<ParsedCookie>,
}

/// Split comma-separated tag input, trimming and dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// The saved-entry collection, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedCookies {
    entries: Vec<SavedEntry>,
}

impl SavedCookies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<SavedEntry>) -> Self {
        Self { entries }
    }

    /// Save a snapshot under `name`.
    ///
    /// # Errors
    ///
    /// [`CookieError::EmptyEntryName`] if `name` is blank.
    pub fn save(
        &mut self,
        name: &str,
        tags: Vec<String>,
        description: &str,
        origin_cookie_string: &str,
        parsed_cookies: Vec<ParsedCookie>,
        now_ms: i64,
    ) -> Result<&SavedEntry> {
        if name.trim().is_empty() {
            return Err(CookieError::EmptyEntryName);
        }

        let mut id = now_ms.to_string();
        // Two saves within the same millisecond still get distinct ids.
        while self.get(&id).is_some() {
            id.push('_');
        }

        self.entries.push(SavedEntry {
            id,
            name: name.to_string(),
            origin_cookie_string: origin_cookie_string.to_string(),
            parsed_cookies,
            tags,
            description: description.to_string(),
            timestamp: now_ms,
        });
        tracing::debug!(entries = self.entries.len(), "saved cookie entry");

        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replace the editable fields of entry `id`.
    ///
    /// # Errors
    ///
    /// [`CookieError::EmptyEntryName`] for a blank name,
    /// [`CookieError::EntryNotFound`] for an unknown id.
    pub fn update(&mut self, id: &str, edit: SavedEdit) -> Result<()> {
        if edit.name.trim().is_empty() {
            return Err(CookieError::EmptyEntryName);
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CookieError::entry_not_found(id))?;

        entry.name = edit.name;
        entry.tags = edit.tags;
        entry.description = edit.description;
        entry.origin_cookie_string = edit.origin_cookie_string;
        entry.parsed_cookies = edit.parsed_cookies;
        Ok(())
    }

    /// Remove entry `id`. Returns whether it existed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: &str) -> Option<&SavedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[SavedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries matching `term`; a blank term returns everything.
    pub fn search(&self, term: &str) -> Vec<&SavedEntry> {
        if term.trim().is_empty() {
            return self.entries.iter().collect();
        }
        self.entries.iter().filter(|e| e.matches(term)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::cookiestring::parse;

    fn sample() -> SavedCookies {
        let mut saved = SavedCookies::new();
        saved
            .save(
                "Staging login",
                parse_tags("auth, staging"),
                "admin session",
                "sid=abc",
                parse("sid=abc"),
                100,
            )
            .unwrap();
        saved
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a, b,,c "), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_save_rejects_blank_name() {
        let mut saved = SavedCookies::new();
        let err = saved.save("  ", vec![], "", "a=1", parse("a=1"), 1).unwrap_err();
        assert_eq!(err, CookieError::EmptyEntryName);
        assert!(saved.is_empty());
    }

    #[test]
    fn test_save_same_millisecond_distinct_ids() {
        let mut saved = sample();
        let id = saved.save("again", vec![], "", "a=1", parse("a=1"), 100).unwrap().id.clone();
        assert_eq!(id, "100_");
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_update() {
        let mut saved = sample();
        saved
            .update(
                "100",
                SavedEdit {
                    name: "Prod".to_string(),
                    tags: vec!["prod".to_string()],
                    description: String::new(),
                    origin_cookie_string: "sid=xyz".to_string(),
                    parsed_cookies: parse("sid=xyz"),
                },
            )
            .unwrap();
        let entry = saved.get("100").unwrap();
        assert_eq!(entry.name, "Prod");
        assert_eq!(entry.parsed_cookies[0].value, "xyz");
        assert_eq!(entry.timestamp, 100);
    }

    #[test]
    fn test_update_errors() {
        let mut saved = sample();
        let edit = SavedEdit {
            name: "x".to_string(),
            ..SavedEdit::default()
        };
        assert_eq!(
            saved.update("nope", edit),
            Err(CookieError::EntryNotFound("nope".to_string()))
        );
        assert_eq!(
            saved.update("100", SavedEdit::default()),
            Err(CookieError::EmptyEntryName)
        );
    }

    #[test]
    fn test_delete_and_search() {
        let mut saved = sample();
        assert_eq!(saved.search("STAGING").len(), 1);
        assert_eq!(saved.search("admin").len(), 1);
        assert_eq!(saved.search("abc").len(), 1);
        assert!(saved.search("zzz").is_empty());

        assert!(saved.delete("100"));
        assert!(!saved.delete("100"));
        assert!(saved.is_empty());
    }

    #[test]
    fn test_compare_item_label() {
        let saved = sample();
        let item = CompareItem::from(&saved.entries()[0]);
        assert_eq!(item.label, "Saved: Staging login");
        assert_eq!(item.source, CompareSource::Saved);
    }
}
