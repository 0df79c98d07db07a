//! Persisted cookbook language preference.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths fall back to
//! the default language so server rendering stays deterministic.

#[cfg(test)]
#[path = "language_pref_test.rs"]
mod language_pref_test;

use cookbook::Language;
#[cfg(feature = "hydrate")]
use cookbook::nav::LANGUAGE_STORAGE_KEY;

/// Interpret a stored value. Unknown or missing values mean the default.
#[must_use]
pub fn parse_preference(raw: Option<&str>) -> Language {
    raw.and_then(|value| Language::from_code(value.trim())).unwrap_or_default()
}

/// Read the preferred language from `localStorage`.
pub fn read_preference() -> Language {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten());
        parse_preference(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Language::default()
    }
}

/// Persist `language` to `localStorage`.
pub fn save_preference(language: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = language;
    }
}
