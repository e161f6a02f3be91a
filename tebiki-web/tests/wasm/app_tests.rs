//! In-browser tests for the manual page behavior

use tebiki_core::events::DocumentEvent;
use tebiki_core::events::LanguageChanged;
use tebiki_core::Lang;
use tebiki_web::language::LanguageController;
use tebiki_web::scroll::ScrollCoordinator;
use tebiki_web::storage::PrefStore;
use tebiki_web::{content, dom, events};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::Callback;

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

#[wasm_bindgen_test]
fn language_switch_rewrites_document_payloads() {
    let mut controller = LanguageController::new(PrefStore);
    // land on a known state regardless of what earlier tests persisted
    controller.set_language("ja", content::manual());
    controller.set_language("en", content::manual());

    let doc = dom::document().unwrap();
    let root = doc.document_element().unwrap();
    assert_eq!(root.get_attribute("lang"), Some("en".into()));
    assert_eq!(doc.title(), content::manual().title.en);

    controller.set_language("ja", content::manual());
    let doc = dom::document().unwrap();
    assert_eq!(
        doc.document_element().unwrap().get_attribute("lang"),
        Some("ja".into())
    );
    assert_eq!(doc.title(), content::manual().title.ja);
}

#[wasm_bindgen_test]
fn invalid_code_leaves_the_document_alone() {
    let mut controller = LanguageController::new(PrefStore);
    controller.set_language("ja", content::manual());
    let before = dom::document().unwrap().title();
    assert!(controller
        .set_language("zz", content::manual())
        .is_none());
    assert_eq!(dom::document().unwrap().title(), before);
}

#[wasm_bindgen_test]
fn preferences_persist_in_local_storage() {
    let store = PrefStore;
    store.set_lang(Lang::En);
    let raw = dom::local_storage()
        .unwrap()
        .get_item("tebiki.lang")
        .unwrap();
    assert_eq!(raw, Some("en".to_string()));
    assert_eq!(store.lang(), Lang::En);

    store.set_dark(true);
    let raw = dom::local_storage()
        .unwrap()
        .get_item("tebiki.dark")
        .unwrap();
    assert_eq!(raw, Some("1".to_string()));
}

#[wasm_bindgen_test]
fn language_change_event_reaches_document_listeners() {
    let doc = dom::document().unwrap();
    let seen = std::rc::Rc::new(std::cell::Cell::new(false));
    let seen_in_listener = seen.clone();
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        seen_in_listener.set(true);
    });
    doc.add_event_listener_with_callback(LanguageChanged::NAME, listener.as_ref().unchecked_ref())
        .unwrap();

    events::dispatch(&LanguageChanged {
        previous: Lang::Ja,
        new: Lang::En,
        timestamp: events::now_ms(),
    });
    assert!(seen.get());

    doc.remove_event_listener_with_callback(
        LanguageChanged::NAME,
        listener.as_ref().unchecked_ref(),
    )
    .unwrap();
}

#[wasm_bindgen_test]
fn app_mounts_with_exactly_one_visible_panel() {
    yew::Renderer::<tebiki_web::app::App>::with_root(mount_point()).render();
    let doc = dom::document().unwrap();
    let visible = doc
        .query_selector_all("[role='tabpanel']:not([hidden])")
        .unwrap();
    assert_eq!(visible.length(), 1);
    let reachable = doc
        .query_selector_all("[role='tab'][tabindex='0']")
        .unwrap();
    assert_eq!(reachable.length(), 1);
}

#[wasm_bindgen_test]
fn unknown_section_never_scrolls_or_activates() {
    let coordinator = ScrollCoordinator::new(Callback::from(|_id: String| {
        panic!("unknown section must not activate a tab");
    }));
    coordinator.scroll_to_section(content::manual(), Some("guide"), "nonexistent");
}

#[wasm_bindgen_test]
async fn card_click_lands_on_the_owning_tab() {
    yew::Renderer::<tebiki_web::app::App>::with_root(mount_point()).render();
    let doc = dom::document().unwrap();

    // the converter card targets a section inside the tools panel while the
    // guide tab starts active, so activation must happen before the scroll
    let card = doc
        .get_element_by_id("card-converter")
        .expect("card renders")
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    card.click();

    dom::sleep_ms(300).await.unwrap();

    let doc = dom::document().unwrap();
    let tools = doc.get_element_by_id("tab-tools").unwrap();
    assert_eq!(tools.get_attribute("aria-selected"), Some("true".into()));
    let visible = doc
        .query_selector_all("[role='tabpanel']:not([hidden])")
        .unwrap();
    assert_eq!(visible.length(), 1);
}

#[wasm_bindgen_test]
fn cross_tab_navigation_activates_the_owner_first() {
    let activated = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = activated.clone();
    let coordinator = ScrollCoordinator::new(Callback::from(move |id: String| {
        sink.borrow_mut().push(id);
    }));
    // "getting-started" lives in the guide tab; pretend faq is active
    coordinator.scroll_to_section(content::manual(), Some("faq"), "getting-started");
    assert_eq!(activated.borrow().as_slice(), ["guide".to_string()]);
    // already-active owners are not re-activated
    coordinator.scroll_to_section(content::manual(), Some("guide"), "getting-started");
    assert_eq!(activated.borrow().len(), 1);
}
