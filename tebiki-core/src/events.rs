//! Records broadcast on the document event channel.
//!
//! Each record is serialized into the `detail` of a DOM `CustomEvent` and is
//! fire-and-forget: zero or more external listeners, no ownership, no reply.

use serde::Serialize;

use crate::lang::Lang;

/// A record broadcast on the document after a completed transition.
pub trait DocumentEvent: Serialize {
    /// `CustomEvent` type the record is dispatched under.
    const NAME: &'static str;
}

/// Emitted after a language transition completes, DOM updates included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LanguageChanged {
    pub previous: Lang,
    pub new: Lang,
    pub timestamp: f64,
}

impl DocumentEvent for LanguageChanged {
    const NAME: &'static str = "tebiki:language-change";
}

/// Emitted after a tab transition; `panel` is the newly active panel id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabChanged {
    pub panel: String,
    pub timestamp: f64,
}

impl DocumentEvent for TabChanged {
    const NAME: &'static str = "tebiki:tab-change";
}

/// Emitted when a feature card is activated, before navigation starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardClicked {
    pub section: String,
    pub timestamp: f64,
}

impl DocumentEvent for CardClicked {
    const NAME: &'static str = "tebiki:card-click";
}

/// Emitted once after the first mount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AppReady {
    pub timestamp: f64,
}

impl DocumentEvent for AppReady {
    const NAME: &'static str = "tebiki:app-ready";
}
