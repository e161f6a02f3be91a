use yew::prelude::*;

use crate::i18n::t;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>
            <p class="footer-tagline">{ t("footer.tagline") }</p>
            <p class="footer-copy">{ t("footer.copy") }</p>
        </footer>
    }
}
