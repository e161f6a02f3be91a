//! Language state and the document side of a language change.
//!
//! The controller owns the current language and the document anchors it
//! rewrites directly: the title, the meta description, and the root `lang`
//! attribute. Tab labels and panel content re-render through the component
//! tree once the caller applies the returned change record.

use tebiki_core::events::LanguageChanged;
use tebiki_core::{Catalog, Lang};
use web_sys::{Document, Element};

use crate::dom;
use crate::events::now_ms;
use crate::i18n;
use crate::storage::PrefStore;

/// Body class carried while a switch is in flight, for the fade effect.
const SWITCHING_CLASS: &str = "language-switching";

/// How long the fade class stays on the body after a switch.
const SWITCHING_MS: i32 = 150;

pub struct LanguageController {
    current: Lang,
    store: PrefStore,
    document: Option<Document>,
    meta_description: Option<Element>,
}

impl LanguageController {
    /// Discover the document anchors once.
    ///
    /// Construction fails soft: without a document the controller still
    /// tracks language state but skips every DOM update, and says so once.
    #[must_use]
    pub fn new(store: PrefStore) -> Self {
        let document = dom::document();
        if document.is_none() {
            log::warn!("no document available; language switches will not touch the page");
        }
        let meta_description = document
            .as_ref()
            .and_then(|doc| doc.query_selector("meta[name='description']").ok())
            .flatten();
        Self {
            current: store.lang(),
            store,
            document,
            meta_description,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Lang {
        self.current
    }

    /// Switch the displayed language.
    ///
    /// An unsupported code is rejected with a log line and no state change.
    /// The current code is the accepted no-op: nothing is written, nothing
    /// is emitted. On a real change the document payloads are rewritten in a
    /// fixed order (title, meta description, root `lang` attribute, chrome
    /// bundle), the preference is persisted, and the change record returned
    /// so the caller can re-render the panels and then broadcast it.
    pub fn set_language(&mut self, code: &str, catalog: &Catalog) -> Option<LanguageChanged> {
        let Some(lang) = Lang::from_code(code) else {
            log::warn!("set_language: unsupported code '{code}'");
            return None;
        };
        if lang == self.current {
            return None;
        }

        let previous = self.current;
        self.current = lang;

        self.add_body_class(SWITCHING_CLASS);
        self.apply_document(lang, catalog);
        i18n::set_lang(lang);
        self.store.set_lang(lang);
        if let Some(doc) = self.document.clone() {
            dom::after_timeout(SWITCHING_MS, move || {
                if let Some(body) = doc.body() {
                    let _ = body.class_list().remove_1(SWITCHING_CLASS);
                }
            });
        }

        Some(LanguageChanged {
            previous,
            new: lang,
            timestamp: now_ms(),
        })
    }

    /// Apply the current language's document payloads without a transition.
    /// Used once at startup so a saved preference shows before first paint.
    pub fn apply_current(&self, catalog: &Catalog) {
        self.apply_document(self.current, catalog);
        i18n::set_lang(self.current);
    }

    fn apply_document(&self, lang: Lang, catalog: &Catalog) {
        let Some(doc) = self.document.as_ref() else {
            return;
        };
        doc.set_title(catalog.title.for_lang(lang));
        if let Some(meta) = self.meta_description.as_ref() {
            if let Err(err) = meta.set_attribute("content", catalog.description.for_lang(lang)) {
                log::warn!(
                    "meta description not updated: {}",
                    dom::js_error_message(&err)
                );
            }
        }
        if let Some(root) = doc.document_element() {
            let _ = root.set_attribute("lang", lang.as_str());
        }
    }

    fn add_body_class(&self, class: &str) {
        if let Some(body) = self.document.as_ref().and_then(Document::body) {
            let _ = body.class_list().add_1(class);
        }
    }
}
