use tebiki_core::Lang;
use yew::prelude::*;

use crate::components::lang_menu::LangMenu;
use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: String,
    pub current: Lang,
    pub dark: bool,
    pub on_lang_change: Callback<Lang>,
    pub on_toggle_dark: Callback<bool>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle_dark = {
        let cb = p.on_toggle_dark.clone();
        let next = !p.dark;
        Callback::from(move |_: MouseEvent| cb.emit(next))
    };
    let dark_label = if p.dark {
        t("ui.dark_mode_off")
    } else {
        t("ui.dark_mode_on")
    };
    let dark_icon = if p.dark { "🌙" } else { "☀️" };
    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <p class="site-title">{ p.title.clone() }</p>
                <div class="header-controls">
                    <button
                        id="dark-toggle"
                        type="button"
                        aria-pressed={if p.dark { "true" } else { "false" }}
                        aria-label={dark_label}
                        title={t("ui.dark_mode")}
                        onclick={toggle_dark}
                    >
                        { dark_icon.to_string() }
                    </button>
                    <LangMenu current={p.current} on_select={p.on_lang_change.clone()} />
                </div>
            </div>
        </header>
    }
}
