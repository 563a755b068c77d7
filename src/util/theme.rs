//! Dark mode initialization and toggle.
//!
//! Reads the persisted preference through the session store and applies
//! the `.dark-mode` class to the `<html>` element. Toggle writes back and
//! updates the class. Requires a browser environment.

use crate::state::session;

/// Read the dark mode preference.
///
/// Returns the stored flag when one exists, otherwise falls back to the
/// system color-scheme preference.
pub fn read_preference() -> bool {
    if let Some(stored) = session::stored_dark_mode() {
        return stored;
    }
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = el.class_list();
        if enabled {
            let _ = class_list.add_1("dark-mode");
        } else {
            let _ = class_list.remove_1("dark-mode");
        }
    }
}

/// Toggle dark mode, apply the class, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    session::store_dark_mode(next);
    next
}
