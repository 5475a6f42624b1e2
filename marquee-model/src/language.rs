//! The language catalogue offered for source and target selection.

use std::fmt;

use crate::error::{ModelError, Result};

/// Base language code the resolution chains treat as the catalog default.
pub const ENGLISH_LANG_CODE: &str = "en";

/// A selectable language variant.
///
/// `region_code` disambiguates variants sharing a base language (Portuguese
/// BR vs PT, Mandarin CN vs TW) and is the key into region-indexed title
/// maps. `lang_code` is the bare language and keys poster art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Language {
    pub display_name: &'static str,
    pub english_name: &'static str,
    pub region_code: &'static str,
    pub lang_code: &'static str,
}

impl Language {
    const fn new(
        display_name: &'static str,
        english_name: &'static str,
        region_code: &'static str,
        lang_code: &'static str,
    ) -> Self {
        Self {
            display_name,
            english_name,
            region_code,
            lang_code,
        }
    }

    /// `{lang}-{region}` tag passed to the catalog to bias localized results.
    pub fn locale_hint(&self) -> String {
        format!("{}-{}", self.lang_code, self.region_code)
    }

    pub fn is_english(&self) -> bool {
        self.lang_code == ENGLISH_LANG_CODE
    }

    /// Same region means the same title pool; used to skip redundant work.
    pub fn same_region(&self, other: &Language) -> bool {
        self.region_code.eq_ignore_ascii_case(other.region_code)
    }

    /// Looks a language up by region code (case-insensitive).
    pub fn by_region(region_code: &str) -> Result<&'static Language> {
        let needle = region_code.trim();
        LANGUAGES
            .iter()
            .find(|lang| lang.region_code.eq_ignore_ascii_case(needle))
            .ok_or_else(|| ModelError::UnknownRegion(needle.to_string()))
    }

    /// Target choices for a given source: every language except the
    /// source's own region.
    pub fn targets_for(source: &Language) -> Vec<&'static Language> {
        LANGUAGES
            .iter()
            .filter(|lang| !lang.same_region(source))
            .collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.region_code)
    }
}

/// Region codes follow the catalog's `iso_3166_1` values.
pub static LANGUAGES: &[Language] = &[
    Language::new("Bahasa indonesia", "Indonesian", "ID", "id"),
    Language::new("български език", "Bulgarian", "BG", "bg"),
    Language::new("Český", "Czech", "CZ", "cs"),
    Language::new("Dansk", "Danish", "DK", "da"),
    Language::new("Deutsch", "German", "DE", "de"),
    Language::new("English", "English", "US", "en"),
    Language::new("Español", "Spanish", "ES", "es"),
    Language::new("Français", "French", "FR", "fr"),
    Language::new("ελληνικά", "Greek", "GR", "el"),
    Language::new("עִבְרִית", "Hebrew", "IL", "he"),
    Language::new("Italiano", "Italian", "IT", "it"),
    Language::new("日本語", "Japanese", "JP", "ja"),
    Language::new("조선말", "Korean", "KR", "ko"),
    Language::new("普通话 (CN)", "Mandarin (CN)", "CN", "zh"),
    Language::new("普通话 (TW)", "Mandarin (TW)", "TW", "zh"),
    Language::new("Nederlands", "Dutch", "NL", "nl"),
    Language::new("Norsk", "Norwegian", "NO", "no"),
    Language::new("فارسی", "Persian", "IR", "fa"),
    Language::new("Polski", "Polish", "PL", "pl"),
    Language::new("Português (BR)", "Portuguese (BR)", "BR", "pt"),
    Language::new("Português (PT)", "Portuguese (PT)", "PT", "pt"),
    Language::new("Pусский", "Russian", "RU", "ru"),
    Language::new("Română", "Romanian", "RO", "ro"),
    Language::new("Slovenčina", "Slovak", "SK", "sk"),
    Language::new("Srpski", "Serbian", "RS", "sr"),
    Language::new("Suomi", "Finnish", "FI", "fi"),
    Language::new("Svenska", "Swedish", "SE", "sv"),
    Language::new("ภาษาไทย", "Thai", "TH", "th"),
    Language::new("Türkçe", "Turkish", "TR", "tr"),
    Language::new("Український", "Ukrainian", "UA", "uk"),
];
