//! The language dropdown.
//!
//! Modal-like: clicking outside or pressing Escape closes it and focus goes
//! back to the trigger button. `Alt+L` toggles it from anywhere on the page.

use tebiki_core::Lang;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::a11y::restore_focus;
use crate::dom;
use crate::i18n::t;

/// Id of the dropdown trigger, used for focus return.
pub const TRIGGER_ID: &str = "language-btn";

const MENU_ID: &str = "language-menu";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Lang,
    pub on_select: Callback<Lang>,
}

#[function_component(LangMenu)]
pub fn lang_menu(props: &Props) -> Html {
    let open = use_state(|| false);

    // any click that bubbles to the document closes the menu; clicks on the
    // trigger and the options stop propagation before it gets here
    {
        let open = open.clone();
        use_effect_with(*open, move |is_open| {
            let mut cleanup: Option<Box<dyn FnOnce()>> = None;
            if *is_open {
                if let Some(doc) = dom::document() {
                    let open_handle = open.clone();
                    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(
                        move |_event: web_sys::Event| {
                            open_handle.set(false);
                        },
                    );
                    if doc
                        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                        .is_ok()
                    {
                        cleanup = Some(Box::new(move || {
                            let _ = doc.remove_event_listener_with_callback(
                                "click",
                                closure.as_ref().unchecked_ref(),
                            );
                        }));
                    }
                }
            }
            move || {
                if let Some(detach) = cleanup {
                    detach();
                }
            }
        });
    }

    // document-level keys: Escape closes an open menu, Alt+L toggles
    {
        let open = open.clone();
        use_effect_with(*open, move |is_open| {
            let is_open = *is_open;
            let mut cleanup: Option<Box<dyn FnOnce()>> = None;
            if let Some(doc) = dom::document() {
                let open_handle = open.clone();
                let closure =
                    Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                        if event.key() == "Escape" && is_open {
                            open_handle.set(false);
                            restore_focus(TRIGGER_ID);
                        } else if event.alt_key() && event.key().eq_ignore_ascii_case("l") {
                            event.prevent_default();
                            open_handle.set(!is_open);
                            restore_focus(TRIGGER_ID);
                        }
                    });
                if doc
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                    .is_ok()
                {
                    cleanup = Some(Box::new(move || {
                        let _ = doc.remove_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        );
                    }));
                }
            }
            move || {
                if let Some(detach) = cleanup {
                    detach();
                }
            }
        });
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            open.set(!*open);
        })
    };

    let option_view = |lang: Lang| {
        let checked = lang == props.current;
        let onclick = {
            let open = open.clone();
            let on_select = props.on_select.clone();
            Callback::from(move |event: MouseEvent| {
                event.stop_propagation();
                on_select.emit(lang);
                open.set(false);
                restore_focus(TRIGGER_ID);
            })
        };
        html! {
            <button
                type="button"
                class="language-option"
                role="menuitemradio"
                aria-checked={if checked { "true" } else { "false" }}
                {onclick}
            >
                <span
                    class={classes!("check", checked.then_some("visible"))}
                    aria-hidden="true"
                >
                    {"✓"}
                </span>
                <span>{ lang.native_label().to_string() }</span>
            </button>
        }
    };

    html! {
        <div class="language-switcher">
            <button
                id={TRIGGER_ID}
                type="button"
                class={classes!("language-btn", (*open).then_some("active"))}
                aria-haspopup="menu"
                aria-expanded={if *open { "true" } else { "false" }}
                aria-controls={MENU_ID}
                aria-label={t("ui.language_menu")}
                onclick={toggle}
            >
                <span class="language-text">{ props.current.native_label().to_string() }</span>
                <span class="language-caret" aria-hidden="true">{"▾"}</span>
            </button>
            <div
                id={MENU_ID}
                class={classes!("language-menu", (*open).then_some("show"))}
                role="menu"
                aria-label={t("ui.language_menu")}
                hidden={!*open}
            >
                { for Lang::ALL.iter().copied().map(option_view) }
            </div>
        </div>
    }
}
