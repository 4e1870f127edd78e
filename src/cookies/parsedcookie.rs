use crate::cookies::classifier::classify;
use crate::cookies::cookietype::CookieType;
use crate::cookies::subvalue;
use serde::{Deserialize, Serialize};

/// One `key=value` pair found inside an ampersand-delimited cookie value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubParsedCookie {
    pub name: String,
    /// Absent in stored pieces that had no `=`.
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type")]
    pub cookie_type: CookieType,
}

impl SubParsedCookie {
    /// Build a sub-value, deriving its type from `value`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            cookie_type: classify(&value),
            value,
        }
    }

    /// Both name and value are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.value.is_empty()
    }
}

/// One semicolon-delimited segment of a cookie string.
///
/// `cookie_type` and `sub_values` are always derived from `value`; build
/// rows through [`ParsedCookie::new`] so they cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCookie {
    /// Positional handle (`row-<index>`) assigned at parse time.
    pub id: String,
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub cookie_type: CookieType,
    #[serde(default)]
    pub sub_values: Vec<SubParsedCookie>,
}

impl ParsedCookie {
    /// Build a row, deriving type and sub-values from `value`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            id: id.into(),
            name: name.into(),
            cookie_type: classify(&value),
            sub_values: subvalue::decode_value(&value),
            value,
        }
    }

    /// Positional row id for split index `index`.
    pub fn row_id(index: usize) -> String {
        format!("row-{}", index)
    }

    /// Both name and value are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.value.is_empty()
    }

    /// Same name and value as `other`, ignoring the id.
    pub fn same_content(&self, other: &ParsedCookie) -> bool {
        self.name == other.name && self.value == other.value
    }
}
