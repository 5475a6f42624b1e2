//! Defaults applied when neither the config file nor the environment set a value.

use std::time::Duration;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_TRANSLATOR_BASE_URL: &str = "https://api.mymemory.translated.net";

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Candidates kept per search. The catalog returns 20 per page.
pub const MIN_PAGE_SIZE: usize = 20;
pub const DEFAULT_PAGE_SIZE: usize = MIN_PAGE_SIZE;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_INITIAL_WINDOW: usize = 6;
pub const DEFAULT_WINDOW_STEP: usize = 6;

pub const DEFAULT_UI_LOCALE: &str = "en";
pub const DEFAULT_SOURCE_REGION: &str = "US";
pub const DEFAULT_TARGET_REGION: &str = "JP";

pub const CONFIG_PATH_ENV: &str = "MARQUEE_CONFIG";
