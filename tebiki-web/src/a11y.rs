// Accessibility helpers

use wasm_bindgen::JsCast;

use crate::dom;

/// Id of the polite live region the app announces into.
pub const STATUS_ID: &str = "a11y-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the
/// page load. Includes focus ring styles and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #2D6CDF;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Updates the text content of the live-region element if present. This is
/// how language and tab changes reach assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = dom::element_by_id(STATUS_ID) {
        node.set_text_content(Some(msg));
    }
}

/// Move keyboard focus back to a control by id, typically the trigger of a
/// menu that just closed.
pub fn restore_focus(id: &str) {
    if let Some(el) = dom::element_by_id(id) {
        if let Ok(html) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = html.focus();
        }
    }
}
