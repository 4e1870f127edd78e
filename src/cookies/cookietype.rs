use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic type inferred for a cookie value.
///
/// Tags are mutually exclusive. Which tag a value receives is decided by
/// [`classify`](crate::cookies::classifier::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieType {
    #[default]
    String,
    Number,
    Boolean,
    Date,
    Json,
    Url,
    Email,
    Uuid,
    Hex,
    Md5,
    Sha1,
    Sha256,
    Phone,
    Timestamp,
    Image,
}

impl CookieType {
    /// Every tag, in declaration order.
    pub const ALL: [CookieType; 15] = [
        CookieType::String,
        CookieType::Number,
        CookieType::Boolean,
        CookieType::Date,
        CookieType::Json,
        CookieType::Url,
        CookieType::Email,
        CookieType::Uuid,
        CookieType::Hex,
        CookieType::Md5,
        CookieType::Sha1,
        CookieType::Sha256,
        CookieType::Phone,
        CookieType::Timestamp,
        CookieType::Image,
    ];

    /// Lowercase tag used on the wire and by display layers.
    pub fn as_str(&self) -> &'static str {
        match self {
            CookieType::String => "string",
            CookieType::Number => "number",
            CookieType::Boolean => "boolean",
            CookieType::Date => "date",
            CookieType::Json => "json",
            CookieType::Url => "url",
            CookieType::Email => "email",
            CookieType::Uuid => "uuid",
            CookieType::Hex => "hex",
            CookieType::Md5 => "md5",
            CookieType::Sha1 => "sha1",
            CookieType::Sha256 => "sha256",
            CookieType::Phone => "phone",
            CookieType::Timestamp => "timestamp",
            CookieType::Image => "image",
        }
    }

    /// Whether the tag names a hash digest.
    pub fn is_digest(&self) -> bool {
        matches!(self, CookieType::Md5 | CookieType::Sha1 | CookieType::Sha256)
    }
}

impl fmt::Display for CookieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag string is not a known [`CookieType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCookieType(pub String);

impl fmt::Display for UnknownCookieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cookie type: {}", self.0)
    }
}

impl std::error::Error for UnknownCookieType {}

impl FromStr for CookieType {
    type Err = UnknownCookieType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CookieType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownCookieType(s.to_string()))
    }
}
