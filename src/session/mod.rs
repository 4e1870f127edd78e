//! Workspace state and the history/saved collaborators.
//!
//! - [`Inspector`](inspector::Inspector): the cookie string being edited
//! - [`CookieHistory`](history::CookieHistory): bounded parse history
//! - [`SavedCookies`](saved::SavedCookies): named, tagged snapshots
//! - [`persistence`]: JSON files for all of the above

pub mod history;
pub mod inspector;
pub mod persistence;
pub mod saved;
