//! Sentinel strings shown in place of missing titles and posters.

use marquee_model::Language;

const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// Localized user-facing messages for one UI locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStrings {
    locale: &'static str,
    no_title_found: &'static str,
    no_movie_found: &'static str,
    no_poster: &'static str,
    searching: &'static str,
}

const ENGLISH: UiStrings = UiStrings {
    locale: "en",
    no_title_found: "No {language} title found",
    no_movie_found: "No movie found",
    no_poster: "No poster available",
    searching: "Searching...",
};

const TABLE: &[UiStrings] = &[
    ENGLISH,
    UiStrings {
        locale: "fr",
        no_title_found: "Aucun titre en {language} trouvé",
        no_movie_found: "Aucun film trouvé",
        no_poster: "Aucune affiche disponible",
        searching: "Recherche...",
    },
    UiStrings {
        locale: "es",
        no_title_found: "No se encontró ningún título en {language}",
        no_movie_found: "No se encontró ninguna película",
        no_poster: "Sin póster disponible",
        searching: "Buscando...",
    },
    UiStrings {
        locale: "de",
        no_title_found: "Kein Titel auf {language} gefunden",
        no_movie_found: "Kein Film gefunden",
        no_poster: "Kein Poster verfügbar",
        searching: "Suche läuft...",
    },
    UiStrings {
        locale: "it",
        no_title_found: "Nessun titolo in {language} trovato",
        no_movie_found: "Nessun film trovato",
        no_poster: "Nessuna locandina disponibile",
        searching: "Ricerca in corso...",
    },
    UiStrings {
        locale: "pt",
        no_title_found: "Nenhum título em {language} encontrado",
        no_movie_found: "Nenhum filme encontrado",
        no_poster: "Nenhum pôster disponível",
        searching: "Pesquisando...",
    },
    UiStrings {
        locale: "ja",
        no_title_found: "{language}のタイトルが見つかりません",
        no_movie_found: "映画が見つかりません",
        no_poster: "ポスターがありません",
        searching: "検索中...",
    },
];

impl Default for UiStrings {
    fn default() -> Self {
        ENGLISH
    }
}

impl UiStrings {
    /// Strings for a locale tag such as `fr` or `pt-BR`; English otherwise.
    pub fn for_locale(tag: &str) -> Self {
        let base = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        TABLE
            .iter()
            .copied()
            .find(|strings| strings.locale == base)
            .unwrap_or(ENGLISH)
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Sentinel naming the language that has no localized title.
    pub fn no_title_found(&self, language: &Language) -> String {
        self.no_title_found
            .replace(LANGUAGE_PLACEHOLDER, language.display_name)
    }

    pub fn no_movie_found(&self) -> &'static str {
        self.no_movie_found
    }

    pub fn no_poster(&self) -> &'static str {
        self.no_poster
    }

    pub fn searching(&self) -> &'static str {
        self.searching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_locales_fall_back_to_english() {
        assert_eq!(UiStrings::for_locale("xx").locale(), "en");
        assert_eq!(UiStrings::for_locale("").locale(), "en");
    }

    #[test]
    fn regional_tags_use_the_base_language() {
        let strings = UiStrings::for_locale("pt_BR");
        assert_eq!(strings.locale(), "pt");
        assert_eq!(strings.no_movie_found(), "Nenhum filme encontrado");
    }

    #[test]
    fn no_title_sentinel_names_the_language() {
        let japanese = Language::by_region("JP").unwrap();
        let sentinel = UiStrings::default().no_title_found(japanese);
        assert_eq!(sentinel, format!("No {} title found", japanese.display_name));
    }
}
