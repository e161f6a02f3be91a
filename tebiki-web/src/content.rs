//! Embedded manual data.
//!
//! The catalog ships inside the binary and is parsed exactly once. A catalog
//! that fails to parse degrades to an empty manual with an error log rather
//! than a fault: the chrome still renders and language switching keeps
//! working.

use once_cell::sync::OnceCell;
use tebiki_core::Catalog;

const MANUAL_JSON: &str = include_str!("../static/assets/data/manual.json");

/// The manual catalog, parsed on first use and shared afterwards.
pub fn manual() -> &'static Catalog {
    static CATALOG: OnceCell<Catalog> = OnceCell::new();
    CATALOG.get_or_init(|| {
        Catalog::from_json(MANUAL_JSON).unwrap_or_else(|err| {
            log::error!("embedded manual catalog failed to load: {err}");
            Catalog::empty()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = manual();
        assert!(!catalog.tabs.is_empty());
    }

    #[test]
    fn every_card_target_is_owned_by_a_tab() {
        let catalog = manual();
        for tab in &catalog.tabs {
            for section in &tab.sections {
                for card in &section.cards {
                    assert!(
                        catalog.owner_of(&card.target).is_some(),
                        "card '{}' points at unknown section '{}'",
                        card.id,
                        card.target
                    );
                }
            }
        }
    }

    #[test]
    fn section_ids_are_unique_across_tabs() {
        let catalog = manual();
        let mut seen = std::collections::HashSet::new();
        for tab in &catalog.tabs {
            for section in &tab.sections {
                assert!(seen.insert(section.id.clone()), "duplicate id {}", section.id);
            }
        }
    }
}
