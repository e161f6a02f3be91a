//! Section and feature-card rendering.

use tebiki_core::{Card, Lang, Section, Text};
use yew::prelude::*;
use yew::AttrValue;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub section: Section,
    pub lang: Lang,
    /// Receives the target section id when a card is activated.
    pub on_card: Callback<String>,
}

/// Rich entries are author-curated markup and opted in per payload; anything
/// else renders as text no matter what it contains.
fn text_view(text: &Text, lang: Lang) -> Html {
    let payload = text.for_lang(lang);
    if text.rich {
        Html::from_html_unchecked(AttrValue::from(payload.to_string()))
    } else {
        html! { { payload.to_string() } }
    }
}

fn card_view(card: &Card, lang: Lang, on_card: &Callback<String>) -> Html {
    let onclick = {
        let on_card = on_card.clone();
        let target = card.target.clone();
        Callback::from(move |_: MouseEvent| on_card.emit(target.clone()))
    };
    html! {
        <button type="button" class="feature-card clickable" id={card.id.clone()} {onclick}>
            <span class="feature-card__icon" aria-hidden="true">{ card.icon.clone() }</span>
            <span class="feature-card__title">{ card.title.for_lang(lang).to_string() }</span>
            <span class="feature-card__blurb">{ card.blurb.for_lang(lang).to_string() }</span>
        </button>
    }
}

#[function_component(SectionView)]
pub fn section_view(props: &Props) -> Html {
    let heading_id = format!("{}-heading", props.section.id);
    html! {
        <section
            id={props.section.id.clone()}
            class="manual-section"
            aria-labelledby={heading_id.clone()}
        >
            <h2 id={heading_id}>{ props.section.title.for_lang(props.lang).to_string() }</h2>
            { for props.section.body.iter().map(|text| html! {
                <p class="manual-section__body">{ text_view(text, props.lang) }</p>
            }) }
            if !props.section.cards.is_empty() {
                <div class="feature-grid">
                    { for props.section.cards.iter().map(|card| card_view(card, props.lang, &props.on_card)) }
                </div>
            }
        </section>
    }
}
