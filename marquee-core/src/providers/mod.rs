//! Remote collaborators: the movie catalog and the back-translation service.

pub mod mymemory;
pub mod tmdb;
mod tmdb_types;

use async_trait::async_trait;
use marquee_model::MovieId;
use std::fmt;

pub use mymemory::MyMemoryTranslator;
pub use tmdb::TmdbCatalog;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Translation quota exhausted")]
    QuotaExhausted,

    #[error("Unsupported language pair: {0}")]
    Unsupported(String),
}

/// One page of catalog search results, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub hits: Vec<SearchHit>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: MovieId,
    pub title: String,
    pub release_year: String,
    pub poster_url: Option<String>,
    pub popularity: f64,
}

/// Full catalog record with every known localized title.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub original_title: String,
    pub original_language: String,
    pub release_year: String,
    pub poster_url: Option<String>,
    pub alternate_titles: Vec<AlternateTitle>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateTitle {
    pub region_code: String,
    pub language_code: String,
    pub title: String,
}

/// A poster as indexed by the catalog: by bare language, or untagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterImage {
    pub language_code: Option<String>,
    pub url: String,
}

/// Read-only movie catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync + fmt::Debug {
    /// `locale` is a `{lang}-{region}` hint; `page` starts at 1.
    async fn search_movies(
        &self,
        query: &str,
        locale: &str,
        page: u32,
    ) -> Result<SearchPage, ProviderError>;

    async fn get_movie_detail(
        &self,
        id: MovieId,
    ) -> Result<MovieRecord, ProviderError>;

    async fn get_movie_images(
        &self,
        id: MovieId,
    ) -> Result<Vec<PosterImage>, ProviderError>;
}

/// Free-text translation used for back-translation hints.
///
/// Implementations own a sticky quota flag: once the service reports quota
/// exhaustion every later call fails fast until the process restarts.
#[async_trait]
pub trait BackTranslator: Send + Sync + fmt::Debug {
    /// Language arguments are BCP 47 tags such as `fr-FR` or `zh-TW`.
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<String>, ProviderError>;

    fn is_quota_exhausted(&self) -> bool;
}
