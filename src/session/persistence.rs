//! JSON persistence for history, saved entries and settings.
//!
//! Files hold the same camelCase blobs the entries serialize to
//! (`originCookieString`, `parsedCookies`, `subValues`), written pretty.

use crate::base::cookieerror::{CookieError, Result};
use crate::base::settings::InspectorSettings;
use crate::session::history::{CookieHistory, HistoryEntry};
use crate::session::saved::{SavedCookies, SavedEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| CookieError::store_io(path.display().to_string(), &e))
}

/// Read and decode `path`; `Ok(None)` when the file does not exist.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(CookieError::store_io(path.display().to_string(), &e)),
    };
    Ok(Some(serde_json::from_str(&json)?))
}

/// Save history entries to `path`.
///
/// # Example
/// ```ignore
/// persistence::save_history(&history, Path::new("cookie-history.json"))?;
/// ```
pub fn save_history(history: &CookieHistory, path: &Path) -> Result<()> {
    tracing::debug!(entries = history.len(), path = %path.display(), "saving history");
    write_json(history.entries(), path)
}

/// Load history from `path`, applying the configured limit.
///
/// A missing file yields an empty history.
pub fn load_history(path: &Path, settings: &InspectorSettings) -> Result<CookieHistory> {
    let entries: Vec<HistoryEntry> = read_json(path)?.unwrap_or_default();
    tracing::debug!(entries = entries.len(), path = %path.display(), "loaded history");
    Ok(CookieHistory::from_entries(entries, settings))
}

/// Save saved entries to `path`.
pub fn save_saved(saved: &SavedCookies, path: &Path) -> Result<()> {
    tracing::debug!(entries = saved.len(), path = %path.display(), "saving saved entries");
    write_json(saved.entries(), path)
}

/// Load saved entries from `path`. A missing file yields no entries.
pub fn load_saved(path: &Path) -> Result<SavedCookies> {
    let entries: Vec<SavedEntry> = read_json(path)?.unwrap_or_default();
    tracing::debug!(entries = entries.len(), path = %path.display(), "loaded saved entries");
    Ok(SavedCookies::from_entries(entries))
}

/// Save settings to `path`.
pub fn save_settings(settings: &InspectorSettings, path: &Path) -> Result<()> {
    write_json(settings, path)
}

/// Load settings from `path`.
///
/// Never fails: a missing file gives defaults, and an unreadable or corrupt
/// file gives defaults with a warning.
pub fn load_settings(path: &Path) -> InspectorSettings {
    match read_json::<InspectorSettings>(path) {
        Ok(Some(settings)) if settings.history_limit == 0 => {
            tracing::warn!(path = %path.display(), "stored history limit is zero, using defaults");
            InspectorSettings::default()
        }
        Ok(Some(settings)) => settings,
        Ok(None) => InspectorSettings::default(),
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "failed to load settings, using defaults");
            InspectorSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::cookiestring::parse;
    use crate::session::saved::parse_tags;
    use tempfile::tempdir;

    #[test]
    fn test_history_save_load_roundtrip() {
        let mut history = CookieHistory::default();
        history.record("a=1;b=x=1&y=2", &parse("a=1;b=x=1&y=2"), 10);
        history.record("c=3", &parse("c=3"), 20);

        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        save_history(&history, &path).unwrap();

        let loaded = load_history(&path, &InspectorSettings::default()).unwrap();
        assert_eq!(loaded, history);
        assert_eq!(loaded.entries()[1].parsed_cookies[1].sub_values.len(), 2);
    }

    #[test]
    fn test_history_load_applies_limit() {
        let mut history = CookieHistory::default();
        history.record("a=1", &parse("a=1"), 1);
        history.record("b=2", &parse("b=2"), 2);

        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        save_history(&history, &path).unwrap();

        let loaded = load_history(&path, &InspectorSettings::new().history_limit(1)).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.entries()[0].origin_cookie_string, "b=2");
    }

    #[test]
    fn test_stored_format_is_camel_case() {
        let mut history = CookieHistory::default();
        history.record("p=x=1&y=2", &parse("p=x=1&y=2"), 5);

        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        save_history(&history, &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"originCookieString\""));
        assert!(raw.contains("\"parsedCookies\""));
        assert!(raw.contains("\"subValues\""));
        assert!(raw.contains("\"type\": \"number\""));
    }

    #[test]
    fn test_missing_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(load_history(&missing, &InspectorSettings::default())
            .unwrap()
            .is_empty());
        assert!(load_saved(&missing).unwrap().is_empty());
        assert_eq!(load_settings(&missing), InspectorSettings::default());
    }

    #[test]
    fn test_corrupt_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_saved(&path).unwrap_err();
        assert!(matches!(err, CookieError::StoreCorrupt { .. }));
        assert_eq!(load_settings(&path), InspectorSettings::default());
    }

    #[test]
    fn test_zero_history_limit_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"historyLimit":0}"#).unwrap();
        assert_eq!(load_settings(&path), InspectorSettings::default());
    }

    #[test]
    fn test_history_sub_value_without_value_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let blob = r#"[{"id":"1","timestamp":1,"originCookieString":"p=a=b&c",
            "parsedCookies":[{"id":"row-0","name":"p","value":"a=b&c","type":"string",
            "subValues":[{"name":"a","value":"b","type":"string"},{"name":"c","type":"string"}]}]}]"#;
        fs::write(&path, blob).unwrap();

        let history = load_history(&path, &InspectorSettings::default()).unwrap();
        let row = &history.entries()[0].parsed_cookies[0];
        assert_eq!(row.sub_values.len(), 2);
        assert_eq!(row.sub_values[1].name, "c");
        assert_eq!(row.sub_values[1].value, "");
    }

    #[test]
    fn test_saved_and_settings_roundtrip() {
        let dir = tempdir().unwrap();

        let mut saved = SavedCookies::new();
        saved
            .save("login", parse_tags("a,b"), "", "sid=1", parse("sid=1"), 7)
            .unwrap();
        let saved_path = dir.path().join("saved.json");
        save_saved(&saved, &saved_path).unwrap();
        assert_eq!(load_saved(&saved_path).unwrap(), saved);

        let settings = InspectorSettings::new().history_limit(12);
        let settings_path = dir.path().join("settings.json");
        save_settings(&settings, &settings_path).unwrap();
        assert_eq!(load_settings(&settings_path), settings);
    }

    #[test]
    fn test_write_to_missing_dir_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("saved.json");
        let err = save_saved(&SavedCookies::new(), &path).unwrap_err();
        assert!(matches!(err, CookieError::StoreIo { .. }));
    }
}
