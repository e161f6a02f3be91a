//! Storage keys and codecs for the two persisted preferences.
//!
//! Everything lives under the `tebiki.` namespace; there is no versioning and
//! no migration. Consumers decide how to react to a missing or corrupt value.

use crate::lang::Lang;

/// Key holding the two-letter language code.
pub const LANG_KEY: &str = "tebiki.lang";

/// Key holding the dark-mode flag as `"1"` / `"0"`.
pub const DARK_KEY: &str = "tebiki.dark";

/// Decode a stored language value. `None` for absent or unrecognized input,
/// so the caller can fall back to detection or the default.
#[must_use]
pub fn decode_lang(raw: Option<&str>) -> Option<Lang> {
    raw.and_then(Lang::from_code)
}

/// Flag encoding shared by the dark-mode preference.
#[must_use]
pub const fn encode_flag(enabled: bool) -> &'static str {
    if enabled {
        "1"
    } else {
        "0"
    }
}

/// Anything other than the enabled marker counts as disabled.
#[must_use]
pub fn decode_flag(raw: Option<&str>) -> bool {
    raw == Some("1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_decoding_rejects_garbage() {
        assert_eq!(decode_lang(Some("ja")), Some(Lang::Ja));
        assert_eq!(decode_lang(Some("en")), Some(Lang::En));
        assert_eq!(decode_lang(Some("xx")), None);
        assert_eq!(decode_lang(Some("")), None);
        assert_eq!(decode_lang(None), None);
    }

    #[test]
    fn flag_round_trips() {
        assert!(decode_flag(Some(encode_flag(true))));
        assert!(!decode_flag(Some(encode_flag(false))));
        assert!(!decode_flag(Some("yes")));
        assert!(!decode_flag(None));
    }
}
