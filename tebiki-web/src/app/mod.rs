//! The application shell.
//!
//! Owns the controllers and the render loop: language state flows through
//! [`LanguageController`], tab state through a reducer around
//! [`TabStrip`], and section navigation through the [`ScrollCoordinator`].
//! Change records are broadcast from effects, after the re-rendered text has
//! been committed to the document, so listeners never observe stale content.

use std::collections::BTreeMap;
use std::rc::Rc;

use tebiki_core::events::{AppReady, CardClicked, LanguageChanged, TabChanged};
use tebiki_core::scroll::SETTLE_MS;
use tebiki_core::tabs::TabChange;
use tebiki_core::{Catalog, TabStrip};
use wasm_bindgen::JsCast;
use yew::functional::Reducible;
use yew::prelude::*;

use crate::a11y;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::section::SectionView;
use crate::components::tabs::TabBar;
use crate::content;
use crate::dom;
use crate::events::{self, now_ms};
use crate::i18n::tr;
use crate::language::LanguageController;
use crate::scroll::ScrollCoordinator;
use crate::storage::PrefStore;
use crate::theme;

pub enum TabAction {
    Activate(String),
}

/// Tab strip plus the record of the last transition, so the post-render
/// effect can broadcast it exactly once (keyed by `seq`).
#[derive(PartialEq)]
pub struct TabState {
    strip: TabStrip,
    seq: u64,
    last_change: Option<TabChange>,
}

impl TabState {
    fn new(catalog: &Catalog) -> Self {
        Self {
            strip: TabStrip::new(catalog.tab_ids()),
            seq: 0,
            last_change: None,
        }
    }
}

impl Reducible for TabState {
    type Action = TabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TabAction::Activate(id) => {
                let mut strip = self.strip.clone();
                match strip.activate(&id) {
                    Some(change) => Rc::new(Self {
                        strip,
                        seq: self.seq + 1,
                        last_change: Some(change),
                    }),
                    None => self,
                }
            }
        }
    }
}

fn focus_panel(tab_id: &str) {
    if let Some(el) = dom::element_by_id(&format!("panel-{tab_id}")) {
        if let Ok(panel) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = panel.set_attribute("tabindex", "-1");
            let _ = panel.focus();
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let controller = use_mut_ref(|| LanguageController::new(PrefStore));
    let lang = use_state(|| controller.borrow().current());
    let dark = use_state(theme::dark_enabled);
    let tab_state = use_reducer(|| TabState::new(content::manual()));
    let pending_lang = use_state(|| Option::<LanguageChanged>::None);
    let catalog = use_memo((), |()| content::manual().clone());

    // one-time boot: saved language onto the document, saved theme, ready
    {
        let controller = controller.clone();
        use_effect_with((), move |()| {
            controller.borrow().apply_current(content::manual());
            theme::apply_saved();
            events::dispatch(&AppReady {
                timestamp: now_ms(),
            });
            || {}
        });
    }

    let on_lang_change = {
        let controller = controller.clone();
        let lang = lang.clone();
        let pending = pending_lang.clone();
        Callback::from(move |selected: tebiki_core::Lang| {
            let change = controller
                .borrow_mut()
                .set_language(selected.as_str(), content::manual());
            if let Some(change) = change {
                lang.set(change.new);
                pending.set(Some(change));
            }
        })
    };

    // broadcast once the switched text has been committed
    {
        let pending = pending_lang.clone();
        use_effect_with(*pending_lang, move |change| {
            if let Some(change) = change {
                events::dispatch(change);
                let mut args = BTreeMap::new();
                args.insert("label", change.new.native_label());
                a11y::set_status(&tr("announce.language_changed", Some(&args)));
                pending.set(None);
            }
            || {}
        });
    }

    // tab transition side effects: event, announcement, focus hand-off
    {
        let tab_state = tab_state.clone();
        let lang_now = *lang;
        use_effect_with(tab_state.seq, move |_seq| {
            if let Some(change) = tab_state.last_change.clone() {
                events::dispatch(&TabChanged {
                    panel: change.active.clone(),
                    timestamp: now_ms(),
                });
                if let Some(tab) = content::manual().tab(&change.active) {
                    let label = tab.label.for_lang(lang_now).to_string();
                    let mut args = BTreeMap::new();
                    args.insert("label", label.as_str());
                    a11y::set_status(&tr("announce.tab_changed", Some(&args)));
                }
                let panel = change.active;
                dom::after_timeout(SETTLE_MS, move || focus_panel(&panel));
            }
            || {}
        });
    }

    let on_activate = {
        let tab_state = tab_state.clone();
        Callback::from(move |id: String| tab_state.dispatch(TabAction::Activate(id)))
    };

    // the coordinator persists across renders so its generation counter can
    // supersede in-flight delayed scrolls
    let coordinator = {
        let handle = tab_state.clone();
        use_memo((), move |()| {
            ScrollCoordinator::new(Callback::from(move |id: String| {
                handle.dispatch(TabAction::Activate(id));
            }))
        })
    };

    let on_card = {
        let coordinator = coordinator.clone();
        let tab_state = tab_state.clone();
        Callback::from(move |target: String| {
            events::dispatch(&CardClicked {
                section: target.clone(),
                timestamp: now_ms(),
            });
            let active = tab_state.strip.active_id().map(str::to_string);
            coordinator.scroll_to_section(content::manual(), active.as_deref(), &target);
        })
    };

    let on_toggle_dark = {
        let dark = dark.clone();
        Callback::from(move |enabled: bool| {
            theme::set_dark(enabled);
            dark.set(enabled);
        })
    };

    let strip = tab_state.strip.clone();

    html! {
        <>
            <style>{ a11y::visible_focus_css().to_string() }</style>
            <Header
                title={catalog.title.for_lang(*lang).to_string()}
                current={*lang}
                dark={*dark}
                on_lang_change={on_lang_change}
                on_toggle_dark={on_toggle_dark}
            />
            <div id={a11y::STATUS_ID} class="sr-only" aria-live="polite"></div>
            <main id="main">
                <TabBar
                    catalog={catalog.clone()}
                    strip={strip.clone()}
                    lang={*lang}
                    on_activate={on_activate.clone()}
                />
                { for catalog.tabs.iter().map(|tab| {
                    let active = strip.is_active(&tab.id);
                    html! {
                        <div
                            id={format!("panel-{}", tab.id)}
                            class="tab-panel"
                            role="tabpanel"
                            aria-labelledby={format!("tab-{}", tab.id)}
                            hidden={!active}
                        >
                            { for tab.sections.iter().map(|section| html! {
                                <SectionView
                                    section={section.clone()}
                                    lang={*lang}
                                    on_card={on_card.clone()}
                                />
                            }) }
                        </div>
                    }
                }) }
            </main>
            <Footer />
        </>
    }
}
