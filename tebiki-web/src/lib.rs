#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod content;
pub mod dom;
pub mod events;
pub mod i18n;
pub mod language;
pub mod scroll;
pub mod storage;
pub mod theme;

/// Minimal initialization when the component tree cannot mount: the saved
/// language still reaches the document payloads and the saved theme applies,
/// so the static markup stays usable.
pub fn fallback_init() {
    let controller = language::LanguageController::new(storage::PrefStore);
    controller.apply_current(content::manual());
    theme::apply_saved();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    match dom::element_by_id("app") {
        Some(root) => {
            yew::Renderer::<app::App>::with_root(root).render();
        }
        None => {
            dom::console_error("mount point #app missing; running minimal initialization");
            fallback_init();
        }
    }
}
