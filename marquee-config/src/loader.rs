use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use url::Url;

use marquee_model::{PosterSize, SelectionMode};

use crate::constants::*;
use crate::models::{
    CatalogConfig, CatalogCredential, Config, ConfigMetadata, SessionConfig,
    TranslatorConfig,
};
use crate::sources::{EnvConfig, FileConfig};
use crate::validation::{self, ConfigGuardRailError, ConfigWarnings};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Replaces the process environment (and skips `.env` loading).
    pub env: Option<EnvConfig>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (env_config, env_file_loaded) = match &self.options.env {
            Some(env) => (env.clone(), false),
            None => {
                let loaded = self.load_env_file()?;
                (EnvConfig::gather(), loaded)
            }
        };

        let (file_config, config_path) = self.load_file_config(&env_config)?;

        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push_with_hint(
                "No marquee.toml detected; falling back to environment variables",
                "Create marquee.toml or set MARQUEE_CONFIG",
            );
        }

        let mut config = compose_config(
            file_config.unwrap_or_default(),
            env_config,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;
        warnings.extend(validation::apply_guard_rails(&mut config)?);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let result = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        result.or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(ConfigLoadError::EnvFile(err)),
        })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone());

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                path
            }
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        catalog: file_catalog,
        translator: file_translator,
        session: file_session,
    } = file;

    let credential = env
        .tmdb_access_token
        .as_deref()
        .map(|token| CatalogCredential::AccessToken(token.to_string()))
        .or_else(|| env.tmdb_api_key.as_deref().and_then(CatalogCredential::detect))
        .or_else(|| {
            file_catalog
                .access_token
                .as_deref()
                .filter(|token| !token.trim().is_empty())
                .map(|token| CatalogCredential::AccessToken(token.trim().to_string()))
        })
        .or_else(|| {
            file_catalog
                .api_key
                .as_deref()
                .and_then(CatalogCredential::detect)
        });

    let catalog = CatalogConfig {
        base_url: parse_url(
            "catalog.base_url",
            env.tmdb_base_url
                .as_deref()
                .or(file_catalog.base_url.as_deref())
                .unwrap_or(DEFAULT_CATALOG_BASE_URL),
        )?,
        image_base_url: parse_url(
            "catalog.image_base_url",
            env.tmdb_image_base_url
                .as_deref()
                .or(file_catalog.image_base_url.as_deref())
                .unwrap_or(DEFAULT_IMAGE_BASE_URL),
        )?,
        credential,
        timeout: parse_duration(
            "catalog.timeout",
            file_catalog.timeout.as_deref(),
            DEFAULT_HTTP_TIMEOUT,
        )?,
        page_size: env
            .page_size
            .or(file_catalog.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE),
        poster_size: parse_poster_size(
            "catalog.poster_size",
            file_catalog.poster_size.as_deref(),
            PosterSize::default(),
        )?,
        thumbnail_size: parse_poster_size(
            "catalog.thumbnail_size",
            file_catalog.thumbnail_size.as_deref(),
            PosterSize::thumbnail(),
        )?,
    };

    let translator = TranslatorConfig {
        enabled: env
            .back_translation
            .or(file_translator.enabled)
            .unwrap_or(true),
        base_url: parse_url(
            "translator.base_url",
            file_translator
                .base_url
                .as_deref()
                .unwrap_or(DEFAULT_TRANSLATOR_BASE_URL),
        )?,
        contact_email: env.mymemory_email.or(file_translator.contact_email),
        timeout: parse_duration(
            "translator.timeout",
            file_translator.timeout.as_deref(),
            DEFAULT_HTTP_TIMEOUT,
        )?,
    };

    let selection_mode = match env
        .selection_mode
        .as_deref()
        .or(file_session.selection_mode.as_deref())
    {
        Some(raw) => raw.parse::<SelectionMode>().map_err(|reason| {
            ConfigLoadError::InvalidValue {
                field: "session.selection_mode",
                value: raw.to_string(),
                reason,
            }
        })?,
        None => SelectionMode::default(),
    };

    let session = SessionConfig {
        selection_mode,
        debounce: parse_duration(
            "session.debounce",
            env.debounce.as_deref().or(file_session.debounce.as_deref()),
            DEFAULT_DEBOUNCE,
        )?,
        initial_window: file_session
            .initial_window
            .unwrap_or(DEFAULT_INITIAL_WINDOW),
        window_step: file_session.window_step.unwrap_or(DEFAULT_WINDOW_STEP),
        ui_locale: env
            .ui_locale
            .or(file_session.ui_locale)
            .unwrap_or_else(|| DEFAULT_UI_LOCALE.to_string()),
        source_region: env
            .source
            .or(file_session.source)
            .unwrap_or_else(|| DEFAULT_SOURCE_REGION.to_string()),
        target_region: env
            .target
            .or(file_session.target)
            .unwrap_or_else(|| DEFAULT_TARGET_REGION.to_string()),
    };

    Ok(Config {
        catalog,
        translator,
        session,
        metadata,
    })
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigLoadError> {
    Url::parse(raw.trim()).map_err(|source| ConfigLoadError::InvalidUrl {
        field,
        value: raw.to_string(),
        source,
    })
}

fn parse_duration(
    field: &'static str,
    raw: Option<&str>,
    default: Duration,
) -> Result<Duration, ConfigLoadError> {
    match raw {
        Some(raw) => humantime::parse_duration(raw.trim()).map_err(|err| {
            ConfigLoadError::InvalidValue {
                field,
                value: raw.to_string(),
                reason: err.to_string(),
            }
        }),
        None => Ok(default),
    }
}

fn parse_poster_size(
    field: &'static str,
    raw: Option<&str>,
    default: PosterSize,
) -> Result<PosterSize, ConfigLoadError> {
    match raw {
        Some(raw) => raw.parse::<PosterSize>().map_err(|reason| {
            ConfigLoadError::InvalidValue {
                field,
                value: raw.to_string(),
                reason,
            }
        }),
        None => Ok(default),
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid URL for {field}: '{value}'")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
