//! Chrome strings for the two supported locales.
//!
//! Section and card content flows through the manual catalog; this module
//! only serves the UI chrome (menu labels, announcements, the footer).
//! Bundles are embedded at build time and swapped as a whole on language
//! change. Lookups fall back to the primary locale, then echo the key.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

use tebiki_core::Lang;

const LOCALE_TABLE: &[(Lang, &str)] = &[
    (Lang::Ja, include_str!("../i18n/ja.json")),
    (Lang::En, include_str!("../i18n/en.json")),
];

struct ChromeBundle {
    lang: Lang,
    strings: Value,
    fallback: Value,
}

fn load_strings(lang: Lang) -> Value {
    let raw = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::error!("chrome strings for '{lang}' failed to parse: {err}");
        Value::Object(serde_json::Map::new())
    })
}

impl ChromeBundle {
    fn new(lang: Lang) -> Self {
        Self {
            lang,
            strings: load_strings(lang),
            fallback: load_strings(Lang::default()),
        }
    }
}

thread_local! {
    static CURRENT: RefCell<ChromeBundle> = RefCell::new(ChromeBundle::new(Lang::default()));
}

/// Swap the active chrome bundle. Persistence and document attributes are
/// the language controller's job, not this module's.
pub fn set_lang(lang: Lang) {
    CURRENT.with(|cell| cell.replace(ChromeBundle::new(lang)));
}

/// The locale the chrome is currently rendered in.
#[must_use]
pub fn current_lang() -> Lang {
    CURRENT.with(|cell| cell.borrow().lang)
}

fn get_nested<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        match current.get(part) {
            Some(value) => current = value,
            None => return None,
        }
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested(&bundle.strings, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a chrome key to the current language.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a chrome key with `{var}` / `{{var}}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
