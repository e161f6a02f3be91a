//! Manual content catalog.
//!
//! The catalog is the explicit registry of everything the page localizes:
//! the document title and meta description, the tab labels, and every section
//! body and feature card. It is deserialized once at startup from embedded
//! JSON and never rediscovered afterwards.

use serde::{Deserialize, Serialize};

use crate::lang::Lang;

/// One localized payload: parallel Japanese and English text.
///
/// `rich` is an explicit opt-in: only entries marked rich in the authored
/// catalog may be rendered as markup. Everything else is inserted as plain
/// text regardless of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Text {
    pub ja: String,
    pub en: String,
    #[serde(default)]
    pub rich: bool,
}

impl Text {
    /// Plain-text payload, mostly a convenience for tests and defaults.
    #[must_use]
    pub fn plain(ja: &str, en: &str) -> Self {
        Self {
            ja: ja.to_string(),
            en: en.to_string(),
            rich: false,
        }
    }

    /// The payload for one language.
    #[must_use]
    pub fn for_lang(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ja => &self.ja,
            Lang::En => &self.en,
        }
    }
}

/// A clickable feature card pointing at a manual section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    /// Section id the card navigates to on activation.
    pub target: String,
    #[serde(default)]
    pub icon: String,
    pub title: Text,
    pub blurb: Text,
}

/// One scroll-addressable section inside a tab panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: Text,
    #[serde(default)]
    pub body: Vec<Text>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// A selectable content view: header label plus its panel sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: Text,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// The whole manual: document-level payloads plus the ordered tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub title: Text,
    pub description: Text,
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog has no tabs")]
    Empty,
}

impl Catalog {
    /// Parse an authored catalog. A catalog without tabs is rejected so the
    /// tab controller never starts without an active descriptor.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        if catalog.tabs.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// Degraded catalog used when the embedded data fails to parse.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tab ids in display order.
    #[must_use]
    pub fn tab_ids(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.id.clone()).collect()
    }

    #[must_use]
    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// The tab whose panel contains `section_id`.
    #[must_use]
    pub fn owner_of(&self, section_id: &str) -> Option<&str> {
        self.tabs
            .iter()
            .find(|t| t.sections.iter().any(|s| s.id == section_id))
            .map(|t| t.id.as_str())
    }

    #[must_use]
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.tabs
            .iter()
            .flat_map(|t| t.sections.iter())
            .find(|s| s.id == section_id)
    }
}
