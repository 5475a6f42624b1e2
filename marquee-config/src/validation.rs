use marquee_model::Language;
use thiserror::Error;

use crate::constants::{DEFAULT_INITIAL_WINDOW, DEFAULT_WINDOW_STEP, MIN_PAGE_SIZE};
use crate::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("unknown {field} language region '{region}'")]
    UnknownRegion { field: &'static str, region: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

/// Normalizes values the runtime cannot work with and reports what changed.
pub fn apply_guard_rails(
    config: &mut Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.catalog.credential.is_none() {
        warnings.push_with_hint(
            "no catalog credential configured; every catalog request will be rejected",
            "Set TMDB_API_KEY or TMDB_ACCESS_TOKEN",
        );
    }

    if config.catalog.page_size < MIN_PAGE_SIZE {
        warnings.push(format!(
            "catalog page_size {} is below the minimum of {MIN_PAGE_SIZE}; using {MIN_PAGE_SIZE}",
            config.catalog.page_size
        ));
        config.catalog.page_size = MIN_PAGE_SIZE;
    }

    if config.session.initial_window == 0 {
        warnings.push(format!(
            "session initial_window must be positive; using {DEFAULT_INITIAL_WINDOW}"
        ));
        config.session.initial_window = DEFAULT_INITIAL_WINDOW;
    }
    if config.session.window_step == 0 {
        warnings.push(format!(
            "session window_step must be positive; using {DEFAULT_WINDOW_STEP}"
        ));
        config.session.window_step = DEFAULT_WINDOW_STEP;
    }

    let source = Language::by_region(&config.session.source_region).map_err(
        |_| ConfigGuardRailError::UnknownRegion {
            field: "source",
            region: config.session.source_region.clone(),
        },
    )?;
    let target = Language::by_region(&config.session.target_region).map_err(
        |_| ConfigGuardRailError::UnknownRegion {
            field: "target",
            region: config.session.target_region.clone(),
        },
    )?;
    config.session.source_region = source.region_code.to_string();
    config.session.target_region = target.region_code.to_string();

    if source.same_region(target) {
        if let Some(replacement) = Language::targets_for(source).first() {
            warnings.push_with_hint(
                format!(
                    "source and target both use region {}; target moved to {}",
                    source.region_code, replacement.region_code
                ),
                "Choose distinct MARQUEE_SOURCE and MARQUEE_TARGET regions",
            );
            config.session.target_region = replacement.region_code.to_string();
        }
    }

    if !config.translator.enabled {
        warnings.push("back-translation hints are disabled");
    }

    Ok(warnings)
}
