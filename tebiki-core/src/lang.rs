use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language for the manual.
///
/// Japanese is the authoring language and the default when no preference has
/// been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ja,
    En,
}

impl Lang {
    /// Every supported language, in selector order.
    pub const ALL: [Self; 2] = [Self::Ja, Self::En];

    /// Two-letter code used for `<html lang>`, storage, and event payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// Parse a two-letter code. Anything outside the supported set is rejected.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ja" => Some(Self::Ja),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Name of the language in that language, for the selector menu.
    #[must_use]
    pub const fn native_label(self) -> &'static str {
        match self {
            Self::Ja => "日本語",
            Self::En => "English",
        }
    }

    /// The one other supported language.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Ja => Self::En,
            Self::En => Self::Ja,
        }
    }

    /// First-visit detection from a BCP 47 navigator tag such as `en-US`.
    ///
    /// English tags select English; everything else stays with Japanese.
    #[must_use]
    pub fn from_navigator(tag: &str) -> Self {
        let lowered = tag.to_ascii_lowercase();
        if lowered == "en" || lowered.starts_with("en-") {
            Self::En
        } else {
            Self::Ja
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
