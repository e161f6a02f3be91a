//! The tab header strip.
//!
//! Roving tabindex: exactly one header is tab-reachable, arrows and Home/End
//! move focus without switching panels, Enter and Space activate. The rule
//! table itself lives in `tebiki_core::tabs`.

use std::rc::Rc;

use tebiki_core::tabs::KeyIntent;
use tebiki_core::{Catalog, Lang, TabStrip};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::dom;
use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub strip: TabStrip,
    pub lang: Lang,
    pub on_activate: Callback<String>,
}

fn focus_header(list: &web_sys::Element, index: usize) {
    let selector = format!("[role='tab'][data-index='{index}']");
    if let Ok(Some(el)) = list.query_selector(&selector) {
        if let Ok(header) = el.dyn_into::<HtmlElement>() {
            let _ = header.focus();
        }
    }
}

#[function_component(TabBar)]
pub fn tab_bar(props: &Props) -> Html {
    let focus_idx = use_state(|| props.strip.active_index());
    let list_ref = use_node_ref();

    // activation from elsewhere (a card jump) drags the roving index along
    {
        let focus_idx = focus_idx.clone();
        use_effect_with(props.strip.active_index(), move |active| {
            focus_idx.set(*active);
            || {}
        });
    }

    // move real keyboard focus only while it is already inside the strip,
    // so page load does not steal focus
    {
        let list_ref = list_ref.clone();
        use_effect_with(*focus_idx, move |index| {
            if let Some(list) = list_ref.cast::<web_sys::Element>() {
                let inside = dom::document()
                    .and_then(|doc| doc.active_element())
                    .is_some_and(|el| list.contains(Some(&*el)));
                if inside {
                    focus_header(&list, *index);
                }
            }
            || {}
        });
    }

    let onkeydown = {
        let strip = props.strip.clone();
        let focus_idx = focus_idx.clone();
        let on_activate = props.on_activate.clone();
        Callback::from(move |event: KeyboardEvent| {
            match strip.key_intent(&event.key(), *focus_idx) {
                Some(KeyIntent::Focus(next)) => {
                    event.prevent_default();
                    focus_idx.set(next);
                }
                Some(KeyIntent::Activate(index)) => {
                    event.prevent_default();
                    if let Some(id) = strip.ids().get(index) {
                        on_activate.emit(id.clone());
                    }
                }
                None => {}
            }
        })
    };

    html! {
        <div
            ref={list_ref}
            class="tab-bar"
            role="tablist"
            aria-label={t("ui.tabs_label")}
            onkeydown={onkeydown}
        >
            { for props.catalog.tabs.iter().enumerate().map(|(index, tab)| {
                let selected = props.strip.is_active(&tab.id);
                let focused = *focus_idx == index;
                let onclick = {
                    let on_activate = props.on_activate.clone();
                    let id = tab.id.clone();
                    Callback::from(move |_: MouseEvent| on_activate.emit(id.clone()))
                };
                html! {
                    <button
                        type="button"
                        id={format!("tab-{}", tab.id)}
                        class={classes!("tab", selected.then_some("tab--active"))}
                        role="tab"
                        data-index={index.to_string()}
                        aria-selected={if selected { "true" } else { "false" }}
                        aria-controls={format!("panel-{}", tab.id)}
                        tabindex={if focused { "0" } else { "-1" }}
                        {onclick}
                    >
                        { tab.label.for_lang(props.lang).to_string() }
                    </button>
                }
            }) }
        </div>
    }
}
