//! Dark-mode preference, carried as a class on the document root.

use crate::dom;
use crate::storage::PrefStore;

const DARK_CLASS: &str = "dark";

fn set_root_class(enabled: bool) {
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let result = if enabled {
            root.class_list().add_1(DARK_CLASS)
        } else {
            root.class_list().remove_1(DARK_CLASS)
        };
        if let Err(err) = result {
            log::warn!("theme class not applied: {}", dom::js_error_message(&err));
        }
    }
}

/// Toggle dark mode and persist the choice.
pub fn set_dark(enabled: bool) {
    set_root_class(enabled);
    PrefStore.set_dark(enabled);
}

/// Saved dark-mode flag; disabled when nothing is stored.
#[must_use]
pub fn dark_enabled() -> bool {
    PrefStore.dark()
}

/// Apply the saved preference at startup without rewriting the slot.
pub fn apply_saved() {
    if dark_enabled() {
        set_root_class(true);
    }
}
