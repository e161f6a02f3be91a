//! Preference persistence.
//!
//! Two slots under the `tebiki.` namespace: the display language and the
//! dark-mode flag. Backed by `localStorage`, mirrored into an in-process map
//! so a session keeps working when persistence is unavailable or rejects the
//! write. Reads and writes never fail the caller.

use std::cell::RefCell;
use std::collections::HashMap;

use tebiki_core::prefs::{self, DARK_KEY, LANG_KEY};
use tebiki_core::Lang;

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Rejected(String),
}

thread_local! {
    static MEMORY: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// The page's preference store.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrefStore;

impl PrefStore {
    fn read(key: &str) -> Option<String> {
        if let Ok(storage) = dom::local_storage() {
            if let Ok(value) = storage.get_item(key) {
                return value;
            }
        }
        MEMORY.with(|mem| mem.borrow().get(key).cloned())
    }

    fn write(key: &str, value: &str) -> Result<(), StorageError> {
        // the in-process mirror keeps read-after-write working even when
        // persistence is gone mid-session
        MEMORY.with(|mem| {
            mem.borrow_mut().insert(key.to_string(), value.to_string());
        });
        let storage = dom::local_storage().map_err(|_| StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(dom::js_error_message(&err)))
    }

    /// The language to display.
    ///
    /// A stored valid code wins; a corrupt value falls back to the default
    /// with a warning; an empty slot falls back to navigator detection.
    #[must_use]
    pub fn lang(&self) -> Lang {
        match Self::read(LANG_KEY) {
            Some(raw) => prefs::decode_lang(Some(&raw)).unwrap_or_else(|| {
                log::warn!("ignoring unrecognized stored language '{raw}'");
                Lang::default()
            }),
            None => Self::detect(),
        }
    }

    fn detect() -> Lang {
        dom::window()
            .and_then(|win| win.navigator().language())
            .map_or_else(Lang::default, |tag| Lang::from_navigator(&tag))
    }

    /// Persist the language choice. Failure is non-fatal and only logged.
    pub fn set_lang(&self, lang: Lang) {
        if let Err(err) = Self::write(LANG_KEY, lang.as_str()) {
            log::warn!("language preference not persisted: {err}");
        }
    }

    /// Saved dark-mode flag; disabled when nothing is stored.
    #[must_use]
    pub fn dark(&self) -> bool {
        prefs::decode_flag(Self::read(DARK_KEY).as_deref())
    }

    /// Persist the dark-mode flag. Failure is non-fatal and only logged.
    pub fn set_dark(&self, enabled: bool) {
        if let Err(err) = Self::write(DARK_KEY, prefs::encode_flag(enabled)) {
            log::warn!("theme preference not persisted: {err}");
        }
    }
}
