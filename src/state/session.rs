#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// localStorage key holding the session token.
const TOKEN_KEY: &str = "token";
/// localStorage key holding the dark mode flag.
const DARK_MODE_KEY: &str = "darkMode";

/// Reactive session state provided as a context at the app root.
///
/// `token` mirrors the persisted credential; `user` is filled in once a
/// login, signup, or verify call returns the account.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SessionState {
    /// Whether a usable token is attached to this state.
    pub fn authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored session token.
///
/// Absent, unreadable, or blank values all count as "no session"; outside
/// a browser this degrades to `None` rather than failing.
pub fn stored_token() -> Option<String> {
    let value = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Persist the session token issued by a successful login or signup.
pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Remove the stored session token.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Read the persisted dark mode flag, if any was ever stored.
pub fn stored_dark_mode() -> Option<bool> {
    let value = local_storage()?.get_item(DARK_MODE_KEY).ok().flatten()?;
    Some(value == "true")
}

/// Persist the dark mode flag.
pub fn store_dark_mode(enabled: bool) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }
}
