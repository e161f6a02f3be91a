//! Native-path tests: controllers, storage, and chrome strings all degrade
//! cleanly without a browser, and state transitions follow the contract.

use std::collections::BTreeMap;

use tebiki_core::Lang;
use tebiki_web::language::LanguageController;
use tebiki_web::storage::PrefStore;
use tebiki_web::{content, i18n};

#[test]
fn language_controller_tracks_state_without_a_document() {
    let mut controller = LanguageController::new(PrefStore);
    assert_eq!(controller.current(), Lang::Ja);

    let change = controller
        .set_language("en", content::manual())
        .expect("valid code should switch");
    assert_eq!(change.previous, Lang::Ja);
    assert_eq!(change.new, Lang::En);
    assert_eq!(controller.current(), Lang::En);
}

#[test]
fn same_code_is_the_accepted_no_op() {
    let mut controller = LanguageController::new(PrefStore);
    assert!(controller.set_language("ja", content::manual()).is_none());
    assert_eq!(controller.current(), Lang::Ja);
}

#[test]
fn invalid_codes_leave_state_unchanged() {
    let mut controller = LanguageController::new(PrefStore);
    for bad in ["zz", "JA", "english", ""] {
        assert!(controller.set_language(bad, content::manual()).is_none());
        assert_eq!(controller.current(), Lang::Ja);
    }
}

#[test]
fn preferences_round_trip_through_the_fallback_store() {
    let store = PrefStore;
    // nothing stored and no navigator: the default wins
    assert_eq!(store.lang(), Lang::Ja);
    for lang in Lang::ALL {
        store.set_lang(lang);
        assert_eq!(store.lang(), lang);
    }
    assert!(!store.dark());
    store.set_dark(true);
    assert!(store.dark());
    store.set_dark(false);
    assert!(!store.dark());
}

#[test]
fn controller_picks_up_the_stored_preference() {
    let store = PrefStore;
    store.set_lang(Lang::En);
    let controller = LanguageController::new(store);
    assert_eq!(controller.current(), Lang::En);
}

#[test]
fn chrome_bundle_switches_and_falls_back() {
    i18n::set_lang(Lang::En);
    assert_eq!(i18n::current_lang(), Lang::En);
    assert_eq!(i18n::t("ui.skip_to_content"), "Skip to content");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    let mut vars = BTreeMap::new();
    vars.insert("label", "English");
    assert!(i18n::tr("announce.tab_changed", Some(&vars)).contains("English"));

    i18n::set_lang(Lang::Ja);
    assert_eq!(i18n::t("ui.skip_to_content"), "本文へ移動");
}

#[test]
fn embedded_manual_covers_both_languages_everywhere() {
    let catalog = content::manual();
    assert!(!catalog.title.ja.is_empty() && !catalog.title.en.is_empty());
    for tab in &catalog.tabs {
        assert!(!tab.label.ja.is_empty() && !tab.label.en.is_empty());
        for section in &tab.sections {
            assert!(!section.title.ja.is_empty() && !section.title.en.is_empty());
            for text in &section.body {
                assert!(!text.ja.is_empty() && !text.en.is_empty());
            }
        }
    }
}

#[test]
fn fallback_init_degrades_without_a_browser() {
    // bootstrap's minimal path must not fault on the native target
    tebiki_web::fallback_init();
}
