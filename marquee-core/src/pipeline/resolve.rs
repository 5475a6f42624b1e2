//! Display-model resolution: a pure function of the loaded detail, the
//! language pair, the query text and any back-translation already received.
//!
//! Each facet walks an ordered fallback chain. The chains are data so the
//! order is visible in one place and covered by tests.

use marquee_model::{
    DisplayModel, ENGLISH_LANG_CODE, Language, MovieDetail, MovieId,
};

use crate::error::{Result, StageError};
use crate::strings::UiStrings;

/// One step in a title fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// Alternate title registered for the language's region.
    RegionTitle,
    /// The production's own title, when the language is its original one.
    OriginalLanguageTitle,
    /// Canonical title, for English only.
    EnglishCanonical,
    /// Canonical title, unconditionally.
    Canonical,
}

impl TitleSource {
    pub fn lookup<'a>(
        self,
        detail: &'a MovieDetail,
        language: &Language,
    ) -> Option<&'a str> {
        let title = match self {
            TitleSource::RegionTitle => {
                detail.title_for_region(language.region_code)
            }
            TitleSource::OriginalLanguageTitle => language
                .lang_code
                .eq_ignore_ascii_case(&detail.original_language_code)
                .then_some(detail.original_title.as_str()),
            TitleSource::EnglishCanonical => {
                language.is_english().then(|| detail.default_title())
            }
            TitleSource::Canonical => Some(detail.default_title()),
        };
        title.filter(|title| !title.trim().is_empty())
    }
}

pub const ORIGINAL_TITLE_CHAIN: [TitleSource; 2] =
    [TitleSource::RegionTitle, TitleSource::Canonical];

/// Ends without a catch-all: exhausting it yields the "no title" sentinel.
pub const TRANSLATED_TITLE_CHAIN: [TitleSource; 3] = [
    TitleSource::RegionTitle,
    TitleSource::OriginalLanguageTitle,
    TitleSource::EnglishCanonical,
];

/// One step in a poster fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSource {
    /// Poster tagged with the language's bare code.
    LanguagePoster,
    /// Default art, for English only.
    EnglishDefault,
    DefaultPoster,
}

impl PosterSource {
    pub fn lookup<'a>(
        self,
        detail: &'a MovieDetail,
        language: &Language,
    ) -> Option<&'a str> {
        match self {
            PosterSource::LanguagePoster => {
                detail.poster_for_language(language.lang_code)
            }
            PosterSource::EnglishDefault => language
                .lang_code
                .eq_ignore_ascii_case(ENGLISH_LANG_CODE)
                .then_some(detail.default_poster.as_deref())
                .flatten(),
            PosterSource::DefaultPoster => detail.default_poster.as_deref(),
        }
    }
}

pub const ORIGINAL_POSTER_CHAIN: [PosterSource; 2] =
    [PosterSource::LanguagePoster, PosterSource::DefaultPoster];

pub const TRANSLATED_POSTER_CHAIN: [PosterSource; 3] = [
    PosterSource::LanguagePoster,
    PosterSource::EnglishDefault,
    PosterSource::DefaultPoster,
];

pub fn resolve_title<'a>(
    chain: &[TitleSource],
    detail: &'a MovieDetail,
    language: &Language,
) -> Result<&'a str> {
    chain
        .iter()
        .find_map(|source| source.lookup(detail, language))
        .ok_or_else(|| StageError::TranslationUnavailable {
            region: language.region_code.to_string(),
        })
}

pub fn resolve_poster<'a>(
    chain: &[PosterSource],
    detail: &'a MovieDetail,
    language: &Language,
) -> Option<&'a str> {
    chain.iter().find_map(|source| source.lookup(detail, language))
}

/// Identifies the one back-translation request a display is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackTranslationKey {
    pub movie_id: MovieId,
    pub source_region: &'static str,
    pub target_region: &'static str,
    pub translated_title: String,
}

/// Everything a display model is derived from.
#[derive(Debug, Clone, Copy)]
pub struct DisplayInputs<'a> {
    pub detail: &'a MovieDetail,
    pub source: &'static Language,
    pub target: &'static Language,
    pub query: &'a str,
    /// Back-translation result, applied only if it matches this display.
    pub back_translation: Option<(&'a BackTranslationKey, Option<&'a str>)>,
}

/// Back-translation is only worth asking for when a real localized title
/// exists and the two sides differ in region.
pub fn back_translation_key(
    detail: &MovieDetail,
    source: &'static Language,
    target: &'static Language,
) -> Option<BackTranslationKey> {
    if source.same_region(target) {
        return None;
    }
    let translated = resolve_title(&TRANSLATED_TITLE_CHAIN, detail, target).ok()?;
    Some(BackTranslationKey {
        movie_id: detail.id,
        source_region: source.region_code,
        target_region: target.region_code,
        translated_title: translated.to_string(),
    })
}

/// Drop hints that tell the user nothing: blank, the query they typed, or
/// the localized title echoed back untranslated.
pub fn accept_hint(
    hint: &str,
    query: &str,
    translated_title: &str,
) -> Option<String> {
    let hint = hint.trim();
    if hint.is_empty() {
        return None;
    }
    let folded = hint.to_lowercase();
    if folded == query.trim().to_lowercase()
        || folded == translated_title.trim().to_lowercase()
    {
        return None;
    }
    Some(hint.to_string())
}

pub fn resolve_display(inputs: DisplayInputs<'_>, strings: &UiStrings) -> DisplayModel {
    let DisplayInputs {
        detail,
        source,
        target,
        query,
        back_translation,
    } = inputs;

    let original_title = resolve_title(&ORIGINAL_TITLE_CHAIN, detail, source)
        .map(str::to_string)
        .unwrap_or_else(|_| detail.canonical_title.clone());

    let translated = resolve_title(&TRANSLATED_TITLE_CHAIN, detail, target);
    let translated_title_found = translated.is_ok();
    let translated_title = match translated {
        Ok(title) => title.to_string(),
        Err(_) => strings.no_title_found(target),
    };

    let back_translation_hint = back_translation
        .filter(|(key, _)| {
            translated_title_found
                && key.movie_id == detail.id
                && key.source_region == source.region_code
                && key.target_region == target.region_code
                && key.translated_title == translated_title
        })
        .and_then(|(_, hint)| hint)
        .and_then(|hint| accept_hint(hint, query, &translated_title));

    DisplayModel {
        original_title,
        original_year: detail.year().map(str::to_string),
        original_poster: resolve_poster(&ORIGINAL_POSTER_CHAIN, detail, source)
            .map(str::to_string),
        translated_title,
        translated_title_found,
        translated_poster: resolve_poster(
            &TRANSLATED_POSTER_CHAIN,
            detail,
            target,
        )
        .map(str::to_string),
        back_translation_hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use marquee_model::DEFAULT_TITLE_KEY;

    fn lang(region: &str) -> &'static Language {
        Language::by_region(region).unwrap()
    }

    fn star_wars() -> MovieDetail {
        let mut translations = BTreeMap::new();
        translations.insert(DEFAULT_TITLE_KEY.into(), "Star Wars".into());
        translations.insert("FR".into(), "La Guerre des étoiles".into());
        let mut posters = BTreeMap::new();
        posters.insert("fr".into(), "poster-fr".into());
        posters.insert("en".into(), "poster-default".into());
        MovieDetail {
            id: MovieId(11),
            canonical_title: "Star Wars".into(),
            original_title: "Star Wars".into(),
            original_language_code: "en".into(),
            release_year: "1977".into(),
            default_poster: Some("poster-default".into()),
            translations_by_region: translations,
            posters_by_language_code: posters,
        }
    }

    fn amelie() -> MovieDetail {
        let mut translations = BTreeMap::new();
        translations.insert(DEFAULT_TITLE_KEY.into(), "Amélie".into());
        MovieDetail {
            id: MovieId(194),
            canonical_title: "Amélie".into(),
            original_title: "Le Fabuleux Destin d'Amélie Poulain".into(),
            original_language_code: "fr".into(),
            release_year: "2001".into(),
            default_poster: None,
            translations_by_region: translations,
            posters_by_language_code: BTreeMap::new(),
        }
    }

    fn inputs<'a>(
        detail: &'a MovieDetail,
        source: &str,
        target: &str,
        query: &'a str,
    ) -> DisplayInputs<'a> {
        DisplayInputs {
            detail,
            source: lang(source),
            target: lang(target),
            query,
            back_translation: None,
        }
    }

    #[test]
    fn french_target_uses_region_title_and_poster() {
        let detail = star_wars();
        let model = resolve_display(
            inputs(&detail, "US", "FR", "star wars"),
            &UiStrings::default(),
        );

        assert_eq!(model.original_title, "Star Wars");
        assert_eq!(model.original_year.as_deref(), Some("1977"));
        assert_eq!(model.original_poster.as_deref(), Some("poster-default"));
        assert_eq!(model.translated_title, "La Guerre des étoiles");
        assert!(model.translated_title_found);
        assert_eq!(model.translated_poster.as_deref(), Some("poster-fr"));
        assert_eq!(model.back_translation_hint, None);
    }

    #[test]
    fn original_language_title_beats_missing_region_entry() {
        let detail = amelie();
        let title =
            resolve_title(&TRANSLATED_TITLE_CHAIN, &detail, lang("FR")).unwrap();
        assert_eq!(title, "Le Fabuleux Destin d'Amélie Poulain");
    }

    #[test]
    fn english_target_falls_back_to_canonical() {
        let detail = amelie();
        let title =
            resolve_title(&TRANSLATED_TITLE_CHAIN, &detail, lang("US")).unwrap();
        assert_eq!(title, "Amélie");
    }

    #[test]
    fn missing_title_yields_localized_sentinel() {
        let detail = star_wars();
        let strings = UiStrings::for_locale("fr");
        let model =
            resolve_display(inputs(&detail, "US", "JP", "star wars"), &strings);

        assert!(!model.translated_title_found);
        assert_eq!(model.translated_title, strings.no_title_found(lang("JP")));
        assert_eq!(model.translated_poster.as_deref(), Some("poster-default"));
        assert!(!model.is_speakable());
    }

    #[test]
    fn sentinel_resolution_is_repeatable() {
        let detail = star_wars();
        let strings = UiStrings::for_locale("ja");
        let first =
            resolve_display(inputs(&detail, "US", "JP", "star wars"), &strings);
        let second =
            resolve_display(inputs(&detail, "US", "JP", "star wars"), &strings);

        assert_eq!(first, second);
        assert_eq!(first.translated_title, strings.no_title_found(lang("JP")));
    }

    #[test]
    fn region_title_takes_precedence_over_original_language_title() {
        let mut detail = amelie();
        detail
            .translations_by_region
            .insert("FR".into(), "Amélie (FR)".into());
        let title =
            resolve_title(&TRANSLATED_TITLE_CHAIN, &detail, lang("FR")).unwrap();
        assert_eq!(title, "Amélie (FR)");
    }

    #[test]
    fn posters_fall_back_to_default_then_none() {
        let detail = star_wars();
        assert_eq!(
            resolve_poster(&TRANSLATED_POSTER_CHAIN, &detail, lang("DE")),
            Some("poster-default")
        );

        let bare = amelie();
        assert_eq!(
            resolve_poster(&ORIGINAL_POSTER_CHAIN, &bare, lang("US")),
            None
        );
        assert_eq!(
            resolve_poster(&TRANSLATED_POSTER_CHAIN, &bare, lang("US")),
            None
        );
    }

    #[test]
    fn no_back_translation_for_same_region_or_sentinel() {
        let detail = star_wars();
        assert!(back_translation_key(&detail, lang("US"), lang("US")).is_none());
        assert!(back_translation_key(&detail, lang("US"), lang("JP")).is_none());

        let key = back_translation_key(&detail, lang("US"), lang("FR")).unwrap();
        assert_eq!(key.translated_title, "La Guerre des étoiles");
        assert_eq!(key.target_region, "FR");
    }

    #[test]
    fn hint_applies_only_to_its_own_key() {
        let detail = star_wars();
        let key = back_translation_key(&detail, lang("US"), lang("FR")).unwrap();

        let mut matching = inputs(&detail, "US", "FR", "star wars");
        matching.back_translation = Some((&key, Some("The War of the Stars")));
        let model = resolve_display(matching, &UiStrings::default());
        assert_eq!(
            model.back_translation_hint.as_deref(),
            Some("The War of the Stars")
        );

        let mut other_target = inputs(&detail, "US", "DE", "star wars");
        other_target.back_translation = Some((&key, Some("The War of the Stars")));
        let model = resolve_display(other_target, &UiStrings::default());
        assert_eq!(model.back_translation_hint, None);
    }

    #[test]
    fn redundant_hints_are_suppressed() {
        assert_eq!(accept_hint("STAR WARS", " star wars ", "Guerre"), None);
        assert_eq!(accept_hint("  ", "x", "y"), None);
        assert_eq!(accept_hint("Guerre", "x", "guerre"), None);
        assert_eq!(
            accept_hint("The War of the Stars", "star wars", "Guerre"),
            Some("The War of the Stars".to_string())
        );
    }
}
