//! In-browser tests for the language dropdown

use tebiki_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{EventTarget, KeyboardEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> web_sys::Element {
    let doc = dom::document().unwrap();
    // a fresh root per test; leftovers from an earlier mount are detached
    if let Some(el) = doc.get_element_by_id("app") {
        el.remove();
    }
    let el = doc.create_element("div").unwrap();
    el.set_id("app");
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn dispatch_key(target: &EventTarget, key: &str, alt: bool) {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key(key);
    init.set_alt_key(alt);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let _ = target.dispatch_event(&event);
}

#[wasm_bindgen_test]
fn trigger_click_opens_and_escape_closes() {
    yew::Renderer::<tebiki_web::app::App>::with_root(mount_point()).render();
    let doc = dom::document().unwrap();

    let btn = doc
        .get_element_by_id("language-btn")
        .expect("trigger renders")
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    btn.click();

    let menu = doc.get_element_by_id("language-menu").expect("menu renders");
    assert!(!menu.has_attribute("hidden"));
    assert_eq!(btn.get_attribute("aria-expanded"), Some("true".into()));

    dispatch_key(&doc.clone().into(), "Escape", false);
    let menu = dom::document()
        .unwrap()
        .get_element_by_id("language-menu")
        .unwrap();
    assert!(menu.has_attribute("hidden"));
}

#[wasm_bindgen_test]
fn alt_l_toggles_the_menu() {
    yew::Renderer::<tebiki_web::app::App>::with_root(mount_point()).render();
    let doc = dom::document().unwrap();

    dispatch_key(&doc.clone().into(), "l", true);
    let menu = doc.get_element_by_id("language-menu").unwrap();
    assert!(!menu.has_attribute("hidden"));

    dispatch_key(&doc.clone().into(), "l", true);
    let menu = dom::document()
        .unwrap()
        .get_element_by_id("language-menu")
        .unwrap();
    assert!(menu.has_attribute("hidden"));
}

#[wasm_bindgen_test]
fn selecting_a_language_closes_and_returns_focus() {
    yew::Renderer::<tebiki_web::app::App>::with_root(mount_point()).render();
    let doc = dom::document().unwrap();

    let btn = doc
        .get_element_by_id("language-btn")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    btn.click();

    let option = doc
        .query_selector(".language-option")
        .unwrap()
        .expect("options render")
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    option.click();

    let menu = dom::document()
        .unwrap()
        .get_element_by_id("language-menu")
        .unwrap();
    assert!(menu.has_attribute("hidden"));
    let active = dom::document().unwrap().active_element().unwrap();
    assert_eq!(active.id(), "language-btn");
}
