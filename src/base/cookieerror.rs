use thiserror::Error;

/// Errors raised by the collaborator-facing parts of the crate.
///
/// Parsing, classification, mutation and comparison never fail; they fall
/// back to permissive results instead. Only persistence, settings validation
/// and saved-entry editing report errors.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    // Store Errors
    #[error("Cookie store I/O failed for {path}: {message}")]
    StoreIo { path: String, message: String },
    #[error("Cookie store is corrupt: {message}")]
    StoreCorrupt { message: String },

    // Settings Errors
    #[error("Invalid history limit: {0:?}")]
    InvalidHistoryLimit(String),

    // Saved Entry Errors
    #[error("Saved entry name must not be empty")]
    EmptyEntryName,
    #[error("Saved entry not found: {0}")]
    EntryNotFound(String),
}

/// Result type alias for fallible collaborator operations.
pub type Result<T> = std::result::Result<T, CookieError>;

impl CookieError {
    /// Create a store I/O error for `path`.
    pub fn store_io(path: impl Into<String>, err: &std::io::Error) -> Self {
        CookieError::StoreIo {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a store corruption error.
    pub fn store_corrupt(message: impl Into<String>) -> Self {
        CookieError::StoreCorrupt {
            message: message.into(),
        }
    }

    /// Create an unknown-entry error.
    pub fn entry_not_found(id: impl Into<String>) -> Self {
        CookieError::EntryNotFound(id.into())
    }

    /// Whether this error came from the backing store rather than user input.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            CookieError::StoreIo { .. } | CookieError::StoreCorrupt { .. }
        )
    }
}

impl From<serde_json::Error> for CookieError {
    fn from(err: serde_json::Error) -> Self {
        CookieError::store_corrupt(err.to_string())
    }
}
