use serde::Deserialize;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub translator: FileTranslatorConfig,
    #[serde(default)]
    pub session: FileSessionConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileCatalogConfig {
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub timeout: Option<String>,
    pub page_size: Option<usize>,
    pub poster_size: Option<String>,
    pub thumbnail_size: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileTranslatorConfig {
    pub enabled: Option<bool>,
    pub base_url: Option<String>,
    pub contact_email: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileSessionConfig {
    pub selection_mode: Option<String>,
    pub debounce: Option<String>,
    pub initial_window: Option<usize>,
    pub window_step: Option<usize>,
    pub ui_locale: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
}

/// Values read from the process environment (after `.env` loading).
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<std::path::PathBuf>,
    pub tmdb_api_key: Option<String>,
    pub tmdb_access_token: Option<String>,
    pub tmdb_base_url: Option<String>,
    pub tmdb_image_base_url: Option<String>,
    pub page_size: Option<usize>,
    pub back_translation: Option<bool>,
    pub mymemory_email: Option<String>,
    pub ui_locale: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub selection_mode: Option<String>,
    pub debounce: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the environment view from an arbitrary lookup. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            config_path: var(crate::constants::CONFIG_PATH_ENV)
                .map(std::path::PathBuf::from),
            tmdb_api_key: var("TMDB_API_KEY"),
            tmdb_access_token: var("TMDB_ACCESS_TOKEN"),
            tmdb_base_url: var("TMDB_BASE_URL"),
            tmdb_image_base_url: var("TMDB_IMAGE_BASE_URL"),
            page_size: var("MARQUEE_PAGE_SIZE").and_then(|s| s.parse().ok()),
            back_translation: var("MARQUEE_BACK_TRANSLATION")
                .and_then(|s| parse_bool(&s)),
            mymemory_email: var("MYMEMORY_EMAIL"),
            ui_locale: var("MARQUEE_UI_LOCALE"),
            source: var("MARQUEE_SOURCE"),
            target: var("MARQUEE_TARGET"),
            selection_mode: var("MARQUEE_SELECTION_MODE"),
            debounce: var("MARQUEE_DEBOUNCE"),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
