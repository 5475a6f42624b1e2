use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

/// Four-digit year, or empty when the date is missing or malformed.
pub(crate) fn release_year(date: Option<NaiveDate>) -> String {
    date.map(|date| format!("{:04}", date.year()))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<MovieShortWire>,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MovieShortWire {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MovieDetailsWire {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub translations: Option<TranslationsWire>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TranslationsWire {
    #[serde(default)]
    pub translations: Vec<TranslationWire>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TranslationWire {
    pub iso_3166_1: String,
    pub iso_639_1: String,
    #[serde(default)]
    pub data: TranslationDataWire,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TranslationDataWire {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ImagesWire {
    #[serde(default)]
    pub posters: Vec<ImageWire>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageWire {
    pub file_path: String,
    #[serde(default)]
    pub iso_639_1: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchMovieQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
    pub query: &'a str,
    pub language: &'a str,
    pub include_adult: bool,
    pub page: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct MovieDetailsQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
    pub append_to_response: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AuthOnlyQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_tolerates_missing_dates() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 11, "title": "Star Wars", "release_date": "1977-05-25",
                 "poster_path": "/sw.jpg", "popularity": 88.5},
                {"id": 12, "title": "Untitled", "release_date": "",
                 "poster_path": null}
            ],
            "total_pages": 3,
            "total_results": 42
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.total_pages, 3);
        assert_eq!(release_year(parsed.results[0].release_date), "1977");
        assert_eq!(release_year(parsed.results[1].release_date), "");
        assert_eq!(parsed.results[1].popularity, 0.0);
    }

    #[test]
    fn translations_with_blank_or_missing_titles_parse() {
        let body = r#"{
            "id": 11,
            "title": "Star Wars",
            "original_title": "Star Wars",
            "original_language": "en",
            "release_date": "1977-05-25",
            "poster_path": "/sw.jpg",
            "translations": {"translations": [
                {"iso_3166_1": "FR", "iso_639_1": "fr",
                 "data": {"title": "La Guerre des étoiles"}},
                {"iso_3166_1": "US", "iso_639_1": "en", "data": {"title": ""}},
                {"iso_3166_1": "DE", "iso_639_1": "de", "data": {}}
            ]}
        }"#;

        let parsed: MovieDetailsWire = serde_json::from_str(body).unwrap();
        let translations = parsed.translations.unwrap().translations;
        assert_eq!(translations.len(), 3);
        assert_eq!(
            translations[0].data.title.as_deref(),
            Some("La Guerre des étoiles")
        );
        assert!(translations[2].data.title.is_none());
    }
}
