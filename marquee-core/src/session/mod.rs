//! Interactive lookup session.
//!
//! [`Session`] owns all state and is advanced only by [`Session::update`],
//! which returns the async work to run next as a [`Task`]. A [`Runtime`]
//! drives those tasks and feeds their messages back in. Every async result
//! carries a ticket and is discarded on arrival if the state it was started
//! for has since moved on.

mod messages;
mod runtime;
mod state;
mod task;
mod update;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use marquee_config::Config;
use marquee_config::constants::{
    DEFAULT_DEBOUNCE, DEFAULT_INITIAL_WINDOW, DEFAULT_PAGE_SIZE,
    DEFAULT_WINDOW_STEP, MIN_PAGE_SIZE,
};
use marquee_model::{DisplayModel, Language, ModelResult, SelectionMode};
use tracing::warn;

use crate::analytics::{AnalyticsSink, TracingAnalytics};
use crate::providers::{BackTranslator, CatalogApi};
use crate::speech::{LoggedSpeech, SpeechOutput};
use crate::strings::UiStrings;

pub use messages::{DetailTicket, Message, SearchTicket};
pub use runtime::Runtime;
pub use state::{DetailOutcome, RequestEpoch, SessionState};
pub use task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub selection_mode: SelectionMode,
    /// Zero dispatches the search on the next runtime step.
    pub debounce: Duration,
    pub page_size: usize,
    pub initial_window: usize,
    pub window_step: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::default(),
            debounce: DEFAULT_DEBOUNCE,
            page_size: DEFAULT_PAGE_SIZE,
            initial_window: DEFAULT_INITIAL_WINDOW,
            window_step: DEFAULT_WINDOW_STEP,
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            selection_mode: config.session.selection_mode,
            debounce: config.session.debounce,
            page_size: config.catalog.page_size,
            initial_window: config.session.initial_window,
            window_step: config.session.window_step,
        }
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(MIN_PAGE_SIZE);
        self.initial_window = self.initial_window.max(1);
        self.window_step = self.window_step.max(1);
        self
    }
}

pub struct Session {
    state: SessionState,
    options: SessionOptions,
    catalog: Arc<dyn CatalogApi>,
    translator: Option<Arc<dyn BackTranslator>>,
    analytics: Arc<dyn AnalyticsSink>,
    speech: Arc<dyn SpeechOutput>,
    strings: UiStrings,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("catalog", &self.catalog)
            .field("translator", &self.translator)
            .field("strings", &self.strings.locale())
            .finish()
    }
}

impl Session {
    /// A target in the source's own region is replaced by the first
    /// language from another region.
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        source: &'static Language,
        target: &'static Language,
        options: SessionOptions,
    ) -> Self {
        let options = options.normalized();
        let target = if target.same_region(source) {
            let replacement = Language::targets_for(source)
                .into_iter()
                .next()
                .unwrap_or(target);
            warn!(
                source = source.region_code,
                target = replacement.region_code,
                "target matched source; using another target"
            );
            replacement
        } else {
            target
        };

        Self {
            state: SessionState::new(source, target, options.initial_window),
            options,
            catalog,
            translator: None,
            analytics: Arc::new(TracingAnalytics),
            speech: Arc::new(LoggedSpeech),
            strings: UiStrings::default(),
        }
    }

    pub fn from_config(
        config: &Config,
        catalog: Arc<dyn CatalogApi>,
    ) -> ModelResult<Self> {
        let source = Language::by_region(&config.session.source_region)?;
        let target = Language::by_region(&config.session.target_region)?;
        Ok(
            Self::new(catalog, source, target, SessionOptions::from_config(config))
                .with_strings(UiStrings::for_locale(&config.session.ui_locale)),
        )
    }

    pub fn with_translator(mut self, translator: Arc<dyn BackTranslator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn with_analytics(mut self, analytics: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = analytics;
        self
    }

    pub fn with_speech(mut self, speech: Arc<dyn SpeechOutput>) -> Self {
        self.speech = speech;
        self
    }

    pub fn with_strings(mut self, strings: UiStrings) -> Self {
        self.strings = strings;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn strings(&self) -> &UiStrings {
        &self.strings
    }

    pub fn display(&self) -> Option<&DisplayModel> {
        self.state.display()
    }

    /// Placeholder for the candidate list: the searching text while a
    /// search is outstanding, `no movie found` once a non-blank query came
    /// back empty, otherwise nothing.
    pub fn status_text(&self) -> Option<&'static str> {
        if self.state.searching {
            Some(self.strings.searching())
        } else if self.state.candidates.is_empty()
            && !self.state.query.trim().is_empty()
        {
            Some(self.strings.no_movie_found())
        } else {
            None
        }
    }

    /// Speech needs a settled display with a real localized title.
    pub fn can_speak(&self) -> bool {
        !self.state.loading
            && self
                .state
                .display
                .as_ref()
                .is_some_and(DisplayModel::is_speakable)
    }

    /// Speak the translated title in the target language. Returns whether
    /// anything was handed to the speech port.
    pub fn speak(&self) -> bool {
        if !self.can_speak() {
            return false;
        }
        let Some(display) = self.state.display.as_ref() else {
            return false;
        };
        self.speech
            .speak(&display.translated_title, self.state.target.lang_code);
        true
    }
}
