//! Inspector settings.
//!
//! Mirrors the small settings surface of the inspector: how many history
//! entries are retained. Settings are plain data; loading and saving them
//! lives in [`crate::session::persistence`].

use crate::base::cookieerror::{CookieError, Result};
use serde::{Deserialize, Serialize};

/// Default number of history entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 300;

/// Inspector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectorSettings {
    /// Maximum number of history entries retained (newest first).
    pub history_limit: usize,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Partial settings update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub history_limit: Option<usize>,
}

impl InspectorSettings {
    /// Create settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the history limit.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the history limit from user-entered text.
    ///
    /// Rejects anything that is not a positive integer.
    pub fn with_history_limit_str(self, text: &str) -> Result<Self> {
        match text.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(self.history_limit(limit)),
            _ => Err(CookieError::InvalidHistoryLimit(text.to_string())),
        }
    }

    /// Merge a partial update over these settings.
    pub fn update(&self, patch: SettingsPatch) -> Self {
        Self {
            history_limit: patch.history_limit.unwrap_or(self.history_limit),
        }
    }
}
