//! Lightweight JSON-backed translations with per-locale bundles.

use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Russian.
    Ru,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Ru]
    }

    /// RFC 5646 primary language subtag for the locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Human-friendly label for the language picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Parsed translations for one locale.
///
/// Lookups fall back to the English tree, then to the caller's default.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Parse the embedded JSON for `locale`. A malformed file yields an empty tree.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self {
            locale,
            tree: parse_locale(locale),
        }
    }

    /// Text at a dotted key such as `nav.home`.
    #[must_use]
    pub fn text(&self, key: &str, default: &str) -> String {
        let pointer = format!("/{}", key.replace('.', "/"));
        [&self.tree, &*ENGLISH]
            .into_iter()
            .find_map(|tree| tree.pointer(&pointer).and_then(Value::as_str))
            .unwrap_or(default)
            .to_string()
    }
}

static ENGLISH: LazyLock<Value> = LazyLock::new(|| parse_locale(LocaleCode::En));

fn parse_locale(locale: LocaleCode) -> Value {
    let raw = match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Ru => include_str!("../../i18n/ru.json"),
    };
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routes::{ROUTE_TABLE, Route};

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn missing_locale_key_falls_back_to_english() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(
            bundle.text("views.not_found.back", ""),
            "Back to home"
        );
        assert_eq!(bundle.text("nav.macros", ""), "КБЖУ");
    }

    #[test]
    fn every_route_has_an_english_nav_label() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        for entry in ROUTE_TABLE {
            assert!(!bundle.text(entry.route.label_key(), "").is_empty());
        }
        assert_eq!(bundle.text(Route::NotFound.label_key(), ""), "Not found");
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            assert!(!bundle.text("nav.home", "").is_empty());
        }
    }

    #[test]
    fn nested_keys_resolve_and_partial_paths_do_not() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("views.macros.title", ""), "Macros");
        assert_eq!(bundle.text("views.macros", "none"), "none");
        assert_eq!(bundle.text("", "none"), "none");
    }

    #[test]
    fn lang_tags_map_to_locales() {
        assert_eq!(LocaleCode::from_lang_tag("ru-RU"), Some(LocaleCode::Ru));
        assert_eq!(LocaleCode::from_lang_tag("EN_gb"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("de"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }
}
