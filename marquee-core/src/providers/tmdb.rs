use std::fmt;

use async_trait::async_trait;
use marquee_config::{CatalogConfig, CatalogCredential};
use marquee_model::{MovieId, PosterSize};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::tmdb_types::{
    AuthOnlyQuery, ImagesWire, MovieDetailsQuery, MovieDetailsWire,
    MovieShortWire, SearchMovieQuery, SearchResponse, release_year,
};
use super::{
    AlternateTitle, CatalogApi, MovieRecord, PosterImage, ProviderError,
    SearchHit, SearchPage,
};

const USER_AGENT: &str = concat!("marquee/", env!("CARGO_PKG_VERSION"));

/// TMDB v3 catalog client.
pub struct TmdbCatalog {
    http: reqwest::Client,
    base_url: Url,
    image_base_url: Url,
    credential: Option<CatalogCredential>,
    poster_size: PosterSize,
    thumbnail_size: PosterSize,
}

impl fmt::Debug for TmdbCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbCatalog")
            .field("base_url", &self.base_url.as_str())
            .field("credential", &self.credential)
            .finish()
    }
}

impl TmdbCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        if config.credential.is_none() {
            warn!("TMDB credential missing; catalog requests will be rejected");
        }

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            image_base_url: config.image_base_url.clone(),
            credential: config.credential.clone(),
            poster_size: config.poster_size,
            thumbnail_size: config.thumbnail_size,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// `{image_base}/{size}{path}`; `None` for missing or blank paths.
    fn image_url(&self, path: Option<&str>, size: PosterSize) -> Option<String> {
        let path = path.map(str::trim).filter(|path| !path.is_empty())?;
        Some(format!(
            "{}/{}{}",
            self.image_base_url.as_str().trim_end_matches('/'),
            size.to_tmdb_param(),
            path
        ))
    }

    fn api_key(&self) -> Option<&str> {
        match &self.credential {
            Some(CatalogCredential::ApiKey(key)) => Some(key.as_str()),
            _ => None,
        }
    }

    async fn get_tmdb_json<Q, T>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.get(url).query(query);
        if let Some(CatalogCredential::AccessToken(token)) = &self.credential {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str::<T>(&body)
                .map_err(|err| ProviderError::ParseError(err.to_string()));
        }

        #[derive(Debug, Deserialize)]
        struct TmdbErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| {
                format!("TMDB request failed with status {}", status)
            });

        match status.as_u16() {
            401 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::ApiError(message)),
        }
    }

    fn to_search_hit(&self, item: MovieShortWire) -> SearchHit {
        SearchHit {
            id: MovieId(item.id),
            poster_url: self
                .image_url(item.poster_path.as_deref(), self.thumbnail_size),
            release_year: release_year(item.release_date),
            title: item.title,
            popularity: item.popularity,
        }
    }

    fn to_movie_record(&self, wire: MovieDetailsWire) -> MovieRecord {
        let alternate_titles = wire
            .translations
            .unwrap_or_default()
            .translations
            .into_iter()
            .map(|entry| AlternateTitle {
                region_code: entry.iso_3166_1,
                language_code: entry.iso_639_1,
                title: entry.data.title.unwrap_or_default(),
            })
            .collect();

        MovieRecord {
            id: MovieId(wire.id),
            poster_url: self
                .image_url(wire.poster_path.as_deref(), self.poster_size),
            release_year: release_year(wire.release_date),
            title: wire.title,
            original_title: wire.original_title,
            original_language: wire.original_language,
            alternate_titles,
        }
    }
}

#[async_trait]
impl CatalogApi for TmdbCatalog {
    async fn search_movies(
        &self,
        query: &str,
        locale: &str,
        page: u32,
    ) -> Result<SearchPage, ProviderError> {
        let params = SearchMovieQuery {
            api_key: self.api_key(),
            query,
            language: locale,
            include_adult: false,
            page: page.max(1),
        };

        let response: SearchResponse = self
            .get_tmdb_json(&self.endpoint("search/movie"), &params)
            .await?;

        debug!(
            query,
            page,
            hits = response.results.len(),
            total_pages = response.total_pages,
            "TMDB search page received"
        );

        Ok(SearchPage {
            total_pages: response.total_pages,
            hits: response
                .results
                .into_iter()
                .map(|item| self.to_search_hit(item))
                .collect(),
        })
    }

    async fn get_movie_detail(
        &self,
        id: MovieId,
    ) -> Result<MovieRecord, ProviderError> {
        let params = MovieDetailsQuery {
            api_key: self.api_key(),
            append_to_response: "translations",
        };

        let wire: MovieDetailsWire = self
            .get_tmdb_json(&self.endpoint(&format!("movie/{id}")), &params)
            .await?;

        Ok(self.to_movie_record(wire))
    }

    async fn get_movie_images(
        &self,
        id: MovieId,
    ) -> Result<Vec<PosterImage>, ProviderError> {
        let params = AuthOnlyQuery {
            api_key: self.api_key(),
        };

        let wire: ImagesWire = self
            .get_tmdb_json(
                &self.endpoint(&format!("movie/{id}/images")),
                &params,
            )
            .await?;

        Ok(wire
            .posters
            .into_iter()
            .filter_map(|image| {
                let url =
                    self.image_url(Some(&image.file_path), self.poster_size)?;
                Some(PosterImage {
                    language_code: image
                        .iso_639_1
                        .filter(|code| !code.trim().is_empty()),
                    url,
                })
            })
            .collect())
    }
}
