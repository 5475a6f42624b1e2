use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use marquee_model::{PosterSize, SelectionMode};
use url::Url;

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub translator: TranslatorConfig,
    pub session: SessionConfig,
    pub metadata: ConfigMetadata,
}

/// How requests to the movie catalog authenticate.
#[derive(Clone, PartialEq, Eq)]
pub enum CatalogCredential {
    /// v3 key sent as the `api_key` query parameter.
    ApiKey(String),
    /// v4 read access token sent as a bearer header.
    AccessToken(String),
}

impl CatalogCredential {
    /// Read access tokens are JWTs; anything else is treated as a v3 key.
    pub fn detect(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else if raw.starts_with("eyJ") {
            Some(Self::AccessToken(raw.to_string()))
        } else {
            Some(Self::ApiKey(raw.to_string()))
        }
    }
}

impl fmt::Debug for CatalogCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogCredential::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            CatalogCredential::AccessToken(_) => {
                f.write_str("AccessToken(<redacted>)")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub image_base_url: Url,
    pub credential: Option<CatalogCredential>,
    pub timeout: Duration,
    pub page_size: usize,
    pub poster_size: PosterSize,
    pub thumbnail_size: PosterSize,
}

#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub enabled: bool,
    pub base_url: Url,
    /// Raises the free daily quota when supplied.
    pub contact_email: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub selection_mode: SelectionMode,
    pub debounce: Duration,
    pub initial_window: usize,
    pub window_step: usize,
    pub ui_locale: String,
    pub source_region: String,
    pub target_region: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
