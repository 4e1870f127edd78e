//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): errors from persistence,
//!   settings and saved-entry editing
//! - [`InspectorSettings`](settings::InspectorSettings): user settings

pub mod cookieerror;
pub mod settings;
