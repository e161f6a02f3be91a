//! Navigation between manual sections.
//!
//! Reaching a section means three steps spread over the timer queue: activate
//! the owning tab, scroll the viewport to the section under the fixed header,
//! then hand keyboard focus to it. Each new request supersedes the delayed
//! steps of the previous one, so overlapping navigations cannot interleave.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tebiki_core::scroll::{self, FOCUS_MS, HIGHLIGHT_MS, SETTLE_MS};
use tebiki_core::Catalog;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};
use yew::Callback;

use crate::dom;

/// Class flashed on a section when navigation arrives at it.
const HIGHLIGHT_CLASS: &str = "section-highlight";

/// Coordinates tab activation, viewport scrolling, and focus hand-off.
#[derive(Clone)]
pub struct ScrollCoordinator {
    /// Bumped by every request; delayed continuations bail out when stale.
    generation: Rc<Cell<u64>>,
    /// Asks the tab controller to activate the owning panel.
    activate_tab: Callback<String>,
}

impl ScrollCoordinator {
    #[must_use]
    pub fn new(activate_tab: Callback<String>) -> Self {
        Self {
            generation: Rc::new(Cell::new(0)),
            activate_tab,
        }
    }

    /// Navigate to a section by id.
    ///
    /// Unknown ids log and do nothing: no scroll, no activation, no fault.
    /// When the owning tab is inactive it is activated first, and the scroll
    /// target is only computed after a settle delay so the layout shift from
    /// the panel swap cannot send the viewport to a stale offset.
    pub fn scroll_to_section(&self, catalog: &Catalog, active_tab: Option<&str>, section_id: &str) {
        if catalog.section(section_id).is_none() {
            log::warn!("scroll_to_section: unknown section '{section_id}'");
            return;
        }
        if let Some(owner) = catalog.owner_of(section_id) {
            if active_tab != Some(owner) {
                self.activate_tab.emit(owner.to_string());
            }
        }

        let generation = self.bump();
        let section = section_id.to_string();
        let coordinator = self.clone();
        dom::after_timeout(SETTLE_MS, move || {
            if coordinator.stale(generation) {
                return;
            }
            coordinator.begin_scroll(&section, generation);
        });
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn stale(&self, generation: u64) -> bool {
        self.generation.get() != generation
    }

    fn begin_scroll(&self, section_id: &str, generation: u64) {
        let Some(el) = dom::element_by_id(section_id) else {
            log::warn!("scroll target '{section_id}' left the document");
            return;
        };
        let Some(win) = dom::window() else {
            return;
        };

        let page_y = win.page_y_offset().unwrap_or(0.0);
        let target = scroll::target_offset(el.get_bounding_client_rect().top(), page_y);

        if smooth_scroll_supported() {
            let opts = ScrollToOptions::new();
            opts.set_top(target);
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        } else {
            animate_scroll(&win, page_y, target, self.clone(), generation);
        }

        let coordinator = self.clone();
        let section = section_id.to_string();
        dom::after_timeout(FOCUS_MS, move || {
            if coordinator.stale(generation) {
                return;
            }
            focus_and_highlight(&section);
        });
    }
}

fn smooth_scroll_supported() -> bool {
    dom::document()
        .and_then(|doc| doc.document_element())
        .is_some_and(|root| {
            js_sys::Reflect::get(&JsValue::from(root), &JsValue::from_str("style"))
                .ok()
                .is_some_and(|style| {
                    js_sys::Reflect::has(&style, &JsValue::from_str("scrollBehavior"))
                        .unwrap_or(false)
                })
        })
}

/// Manual ease-in-out scroll driven by the repaint callback, for platforms
/// without a smooth scroll primitive. A superseded generation stops the loop
/// on its next frame.
fn animate_scroll(
    win: &Window,
    start: f64,
    end: f64,
    coordinator: ScrollCoordinator,
    generation: u64,
) {
    let begun: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_handle = Rc::clone(&handle);
    let frame_win = win.clone();

    *handle.borrow_mut() = Some(Closure::new(move |now: f64| {
        if coordinator.stale(generation) {
            let _ = frame_handle.borrow_mut().take();
            return;
        }
        let started = begun.get().unwrap_or(now);
        begun.set(Some(started));
        let elapsed = now - started;
        frame_win.scroll_to_with_x_and_y(0.0, scroll::frame_position(start, end, elapsed));
        if scroll::animation_done(elapsed) {
            let _ = frame_handle.borrow_mut().take();
            return;
        }
        let request = frame_handle
            .borrow()
            .as_ref()
            .map(|cl| frame_win.request_animation_frame(cl.as_ref().unchecked_ref()));
        if !matches!(request, Some(Ok(_))) {
            frame_win.scroll_to_with_x_and_y(0.0, end);
            let _ = frame_handle.borrow_mut().take();
        }
    }));

    let first = handle
        .borrow()
        .as_ref()
        .map(|cl| win.request_animation_frame(cl.as_ref().unchecked_ref()));
    if !matches!(first, Some(Ok(_))) {
        // no repaint callback either; land on the target immediately
        win.scroll_to_with_x_and_y(0.0, end);
        let _ = handle.borrow_mut().take();
    }
}

fn focus_and_highlight(section_id: &str) {
    let Some(el) = dom::element_by_id(section_id) else {
        return;
    };
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.set_attribute("tabindex", "-1");
        let _ = html.focus();
    }
    let _ = el.class_list().add_1(HIGHLIGHT_CLASS);
    dom::after_timeout(HIGHLIGHT_MS, move || {
        let _ = el.class_list().remove_1(HIGHLIGHT_CLASS);
    });
}
