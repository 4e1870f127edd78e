//! Workspace state for one cookie string being inspected.
//!
//! [`Inspector`] owns the origin string, the rows parsed from it and the
//! current selection. Every edit goes through the pure functions in
//! [`crate::cookies`] and the origin string is re-serialized afterwards, so
//! the two views never drift apart.

use crate::base::cookieerror::Result;
use crate::cookies::compare::CompareItem;
use crate::cookies::cookiestring::{append_cookie_string, parse, select_rows, serialize};
use crate::cookies::mutation;
use crate::cookies::parsedcookie::ParsedCookie;
use crate::session::history::HistoryEntry;
use crate::session::saved::{SavedCookies, SavedEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inspector {
    origin_cookie_string: String,
    parsed_cookies: Vec<ParsedCookie>,
    selected: Vec<String>,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a cookie string.
    pub fn from_cookie_string(cookie_string: &str) -> Self {
        let mut inspector = Self::new();
        inspector.set_origin_string(cookie_string);
        inspector
    }

    pub fn origin_cookie_string(&self) -> &str {
        &self.origin_cookie_string
    }

    pub fn parsed_cookies(&self) -> &[ParsedCookie] {
        &self.parsed_cookies
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Replace the origin string verbatim and re-parse it.
    pub fn set_origin_string(&mut self, cookie_string: &str) {
        self.origin_cookie_string = cookie_string.to_string();
        self.parsed_cookies = parse(cookie_string);
        self.prune_selection();
    }

    /// Append another cookie string and re-parse.
    pub fn append(&mut self, cookie_string: &str) {
        let combined = append_cookie_string(&self.origin_cookie_string, cookie_string);
        self.set_origin_string(&combined);
    }

    pub fn update_row_value(&mut self, id: &str, new_value: &str, new_name: Option<&str>) {
        let rows = mutation::update_row_value(&self.parsed_cookies, id, new_value, new_name);
        self.apply(rows);
    }

    pub fn update_sub_value(&mut self, row_id: &str, sub_index: usize, new_sub_value: &str) {
        let rows = mutation::update_sub_value(&self.parsed_cookies, row_id, sub_index, new_sub_value);
        self.apply(rows);
    }

    pub fn delete_row(&mut self, id: &str) {
        let rows = mutation::delete_row(&self.parsed_cookies, id);
        self.apply(rows);
    }

    pub fn delete_sub_value(&mut self, row_id: &str, sub_index: usize) {
        let rows = mutation::delete_sub_value(&self.parsed_cookies, row_id, sub_index);
        self.apply(rows);
    }

    /// Flip the selection state of row `id`. Unknown ids are ignored.
    pub fn toggle_selected(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else if self.parsed_cookies.iter().any(|row| row.id == id) {
            self.selected.push(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selected rows, or every row when nothing is selected.
    pub fn selected_rows(&self) -> Vec<ParsedCookie> {
        select_rows(&self.parsed_cookies, &self.selected)
    }

    /// Cookie string of [`selected_rows`](Self::selected_rows).
    pub fn selected_cookie_string(&self) -> String {
        serialize(&self.selected_rows())
    }

    /// Snapshot the workspace as a history entry.
    pub fn snapshot(&self, now_ms: i64) -> HistoryEntry {
        HistoryEntry::new(
            self.origin_cookie_string.clone(),
            self.parsed_cookies.clone(),
            now_ms,
        )
    }

    /// Save the current selection into `saved`.
    pub fn save_selection<'a>(
        &self,
        saved: &'a mut SavedCookies,
        name: &str,
        tags: Vec<String>,
        description: &str,
        now_ms: i64,
    ) -> Result<&'a SavedEntry> {
        saved.save(
            name,
            tags,
            description,
            &self.selected_cookie_string(),
            self.selected_rows(),
            now_ms,
        )
    }

    /// Restore a history entry verbatim, without re-parsing.
    pub fn restore_history(&mut self, entry: &HistoryEntry) {
        self.restore(&entry.origin_cookie_string, &entry.parsed_cookies);
    }

    /// Restore a saved entry verbatim, without re-parsing.
    pub fn restore_saved(&mut self, entry: &SavedEntry) {
        self.restore(&entry.origin_cookie_string, &entry.parsed_cookies);
    }

    /// Comparison snapshot of the workspace.
    pub fn compare_item(&self) -> CompareItem {
        CompareItem::current(self.origin_cookie_string.clone(), self.parsed_cookies.clone())
    }

    /// Clear the workspace.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn restore(&mut self, origin_cookie_string: &str, parsed_cookies: &[ParsedCookie]) {
        self.origin_cookie_string = origin_cookie_string.to_string();
        self.parsed_cookies = parsed_cookies.to_vec();
        self.selected.clear();
    }

    fn apply(&mut self, rows: Vec<ParsedCookie>) {
        // A `;` in an edited value re-parses the string and renumbers ids.
        let renumbered = rows
            .iter()
            .any(|row| !self.parsed_cookies.iter().any(|old| old.id == row.id));
        if renumbered {
            self.remap_selection(&rows);
        }
        self.origin_cookie_string = serialize(&rows);
        self.parsed_cookies = rows;
        self.prune_selection();
    }

    /// Follow selected rows to their new ids by name and value. Rows with
    /// no counterpart drop out of the selection.
    fn remap_selection(&mut self, rows: &[ParsedCookie]) {
        let mut claimed: Vec<&str> = Vec::new();
        let mut remapped = Vec::new();
        for id in &self.selected {
            let Some(old) = self.parsed_cookies.iter().find(|row| &row.id == id) else {
                continue;
            };
            let found = rows
                .iter()
                .find(|row| row.same_content(old) && !claimed.contains(&row.id.as_str()));
            if let Some(row) = found {
                claimed.push(row.id.as_str());
                remapped.push(row.id.clone());
            }
        }
        self.selected = remapped;
    }

    /// Drop selected ids that no longer name a row.
    fn prune_selection(&mut self) {
        let rows = &self.parsed_cookies;
        self.selected.retain(|id| rows.iter().any(|row| &row.id == id));
    }
}
