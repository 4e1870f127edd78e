//! Cookie value type inference.
//!
//! A value is run through an ordered cascade of rules and receives the tag
//! of the first rule that matches. Structured formats sit ahead of the
//! loose numeric and date rules: digests and timestamps look numeric, and
//! dates parse loosely, so the order decides the outcome.
//!
//! Classification depends only on the input text. No clock, locale or
//! global state is consulted.

use crate::cookies::cookietype::CookieType;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use std::sync::LazyLock;
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};
use url::Url;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").unwrap()
});

// 8-4-4-4-12 layout only; version and variant nibbles are not checked.
static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static IMAGE_DATA_URI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:image/[A-Za-z0-9.+\-]+;base64,(.+)$").unwrap());

// NANP-style grouping with an optional country code, or a bare E.164 number.
static PHONE_GROUPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+\d{1,3}[\s.\-]?)?\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}$").unwrap()
});

static PHONE_E164: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+\d{7,15}$").unwrap());

/// One link of the classification chain.
struct Rule {
    tag: CookieType,
    matches: fn(&str) -> bool,
}

/// The cascade, highest priority first. Blank input is handled before the
/// chain runs.
static RULES: &[Rule] = &[
    Rule { tag: CookieType::Email, matches: is_email },
    Rule { tag: CookieType::Uuid, matches: is_uuid },
    Rule { tag: CookieType::Hex, matches: is_hex_color },
    Rule { tag: CookieType::Boolean, matches: is_boolean },
    Rule { tag: CookieType::Timestamp, matches: is_timestamp },
    Rule { tag: CookieType::Json, matches: is_json },
    Rule { tag: CookieType::Image, matches: is_image_data_uri },
    Rule { tag: CookieType::Url, matches: is_url },
    Rule { tag: CookieType::Md5, matches: is_md5 },
    Rule { tag: CookieType::Sha1, matches: is_sha1 },
    Rule { tag: CookieType::Sha256, matches: is_sha256 },
    Rule { tag: CookieType::Phone, matches: is_phone },
    Rule { tag: CookieType::Number, matches: is_number },
    Rule { tag: CookieType::Date, matches: is_date },
];

/// Infer the [`CookieType`] of a raw value.
///
/// Never fails: anything no rule recognises is a [`CookieType::String`].
pub fn classify(value: &str) -> CookieType {
    let value = value.trim();
    if value.is_empty() {
        return CookieType::String;
    }

    RULES
        .iter()
        .find(|rule| (rule.matches)(value))
        .map(|rule| rule.tag)
        .unwrap_or(CookieType::String)
}

/// Tags in the order the cascade tries them.
pub fn cascade() -> impl Iterator<Item = CookieType> {
    RULES.iter().map(|rule| rule.tag)
}

fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

fn is_uuid(value: &str) -> bool {
    UUID.is_match(value)
}

fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

fn is_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}

/// Seconds (10 digits) through milliseconds (13 digits) since the epoch.
fn is_timestamp(value: &str) -> bool {
    (10..=13).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_json(value: &str) -> bool {
    matches!(
        serde_json::from_str::<serde_json::Value>(value),
        Ok(parsed) if !parsed.is_number()
    )
}

fn is_image_data_uri(value: &str) -> bool {
    IMAGE_DATA_URI
        .captures(value)
        .and_then(|caps| caps.get(1))
        .is_some_and(|payload| STANDARD.decode(payload.as_str()).is_ok())
}

/// Absolute URLs with a scheme and a host.
fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_host())
}

fn is_hex_digest(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_md5(value: &str) -> bool {
    is_hex_digest(value, 32)
}

fn is_sha1(value: &str) -> bool {
    is_hex_digest(value, 40)
}

fn is_sha256(value: &str) -> bool {
    is_hex_digest(value, 64)
}

fn is_phone(value: &str) -> bool {
    PHONE_GROUPED.is_match(value) || PHONE_E164.is_match(value)
}

/// Finite decimals, plus unsigned `0x`/`0o`/`0b` integer literals.
fn is_number(value: &str) -> bool {
    if let Some((radix, digits)) = radix_literal(value) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn radix_literal(value: &str) -> Option<(u32, &str)> {
    let (prefix, digits) = (value.get(..2)?, value.get(2..)?);
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, digits))
}

fn is_date(value: &str) -> bool {
    if OffsetDateTime::parse(value, &Rfc3339).is_ok()
        || OffsetDateTime::parse(value, &Rfc2822).is_ok()
    {
        return true;
    }

    let dates = [
        format_description!("[year]-[month]-[day]"),
        format_description!("[year]/[month]/[day]"),
    ];
    if dates.iter().any(|&format| Date::parse(value, format).is_ok()) {
        return true;
    }

    let date_times = [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]/[month]/[day] [hour]:[minute]:[second]"),
        // HTTP-date and the dashed variant browsers write into Expires.
        format_description!(
            "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
        ),
        format_description!(
            "[weekday repr:short], [day]-[month repr:short]-[year] [hour]:[minute]:[second] GMT"
        ),
    ];
    date_times
        .iter()
        .any(|&format| PrimitiveDateTime::parse(value, format).is_ok())
}
