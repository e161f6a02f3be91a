//! Document-scoped broadcast of app event records.
//!
//! External collaborators (analytics and the like) listen on the document;
//! the app never waits for them. A record is serialized into the `detail` of
//! a bubbling `CustomEvent` named by the record type.

use serde::Serialize;
use tebiki_core::events::DocumentEvent;
use web_sys::CustomEvent;
use web_sys::CustomEventInit;

use crate::dom;

/// Milliseconds since the epoch for event payloads.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Fire-and-forget dispatch on the document. Without a document (native test
/// path) the record is dropped silently.
pub fn dispatch<E>(record: &E)
where
    E: DocumentEvent + Serialize,
{
    let Some(doc) = dom::document() else {
        return;
    };
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    match serde_wasm_bindgen::to_value(record) {
        Ok(detail) => init.set_detail(&detail),
        Err(err) => log::warn!("event '{}' detail not serialized: {err}", E::NAME),
    }
    match CustomEvent::new_with_event_init_dict(E::NAME, &init) {
        Ok(event) => {
            let _ = doc.dispatch_event(&event);
        }
        Err(err) => dom::console_error(&format!(
            "Failed to dispatch '{}': {}",
            E::NAME,
            dom::js_error_message(&err)
        )),
    }
}
