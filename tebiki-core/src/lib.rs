//! Tebiki core
//!
//! Platform-agnostic state and rules for the Tebiki bilingual manual page.
//! This crate provides the language, tab, and navigation logic without UI or
//! browser-specific dependencies.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod events;
pub mod lang;
pub mod prefs;
pub mod scroll;
pub mod tabs;

// Re-export commonly used types
pub use catalog::{Card, Catalog, CatalogError, Section, Tab, Text};
pub use events::{AppReady, CardClicked, DocumentEvent, LanguageChanged, TabChanged};
pub use lang::Lang;
pub use tabs::{KeyIntent, TabChange, TabStrip};
