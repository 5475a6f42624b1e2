use std::collections::BTreeMap;

use crate::ids::MovieId;

/// Key in [`MovieDetail::translations_by_region`] holding the canonical title.
pub const DEFAULT_TITLE_KEY: &str = "_default";

/// A single catalog search hit prior to full detail resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateMovie {
    pub id: MovieId,
    pub title: String,
    /// Four-digit year, or empty when the catalog has no release date.
    pub release_year: String,
    pub poster_url: Option<String>,
}

/// Fully fetched record for one selected candidate.
///
/// Immutable once built; a new selection replaces it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetail {
    pub id: MovieId,
    pub canonical_title: String,
    /// Title in the production's own language.
    pub original_title: String,
    pub original_language_code: String,
    pub release_year: String,
    pub default_poster: Option<String>,
    /// Region code -> localized title. Never holds empty strings.
    pub translations_by_region: BTreeMap<String, String>,
    /// Bare language code -> poster url. First poster seen per language wins.
    pub posters_by_language_code: BTreeMap<String, String>,
}

impl MovieDetail {
    /// Localized title for a region, ignoring blank entries.
    pub fn title_for_region(&self, region_code: &str) -> Option<&str> {
        self.translations_by_region
            .get(region_code)
            .map(String::as_str)
            .filter(|title| !title.trim().is_empty())
    }

    pub fn poster_for_language(&self, lang_code: &str) -> Option<&str> {
        self.posters_by_language_code
            .get(lang_code)
            .map(String::as_str)
    }

    /// Canonical title as stored under [`DEFAULT_TITLE_KEY`], falling back to
    /// the record field.
    pub fn default_title(&self) -> &str {
        self.title_for_region(DEFAULT_TITLE_KEY)
            .unwrap_or(&self.canonical_title)
    }

    pub fn year(&self) -> Option<&str> {
        Some(self.release_year.as_str()).filter(|year| !year.is_empty())
    }
}
