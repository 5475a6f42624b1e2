use std::sync::Arc;

use marquee_model::{DisplayModel, Language, MovieId, SelectionMode};
use tracing::{debug, info, warn};

use super::messages::{DetailTicket, Message, SearchTicket};
use super::state::DetailOutcome;
use super::{Session, Task};
use crate::analytics::LanguageSide;
use crate::error::StageError;
use crate::pipeline::{
    BackTranslationKey, DisplayInputs, back_translation_key, fetch_detail,
    resolve_display, search_candidates,
};

impl Session {
    pub fn update(&mut self, message: Message) -> Task {
        match message {
            Message::QueryChanged(text) => self.on_query_changed(text),

            Message::SearchDebounced(query) => {
                // Stale if the user kept typing
                if self.state.query != query {
                    debug!(query = %query, "dropping superseded debounce");
                    return Task::none();
                }
                self.state.debounce_pending = false;
                self.analytics
                    .record_search(query.trim(), self.state.source);
                self.dispatch_search()
            }

            Message::SearchCompleted { ticket, candidates } => {
                self.on_search_completed(ticket, candidates)
            }

            Message::LoadMore => {
                if self.state.has_more() {
                    self.state.visible = (self.state.visible
                        + self.options.window_step)
                        .min(self.state.candidates.len());
                }
                Task::none()
            }

            Message::CandidateChosen(id) => {
                if !self.state.candidates.iter().any(|c| c.id == id) {
                    warn!(movie_id = %id, "ignoring selection outside the candidate list");
                    return Task::none();
                }
                self.choose(id)
            }

            Message::DetailLoaded { ticket, result } => {
                self.on_detail_loaded(ticket, result)
            }

            Message::BackTranslated { key, result } => {
                self.on_back_translated(key, result)
            }

            Message::SourceLanguageChanged(language) => {
                self.on_source_changed(language)
            }

            Message::TargetLanguageChanged(language) => {
                self.on_target_changed(language)
            }
        }
    }

    fn on_query_changed(&mut self, text: String) -> Task {
        self.state.query = text.clone();
        self.state.visible = self.options.initial_window;
        self.state.clear_selection();
        self.state.search_epoch.advance();

        if text.trim().is_empty() {
            self.state.candidates.clear();
            self.state.searching = false;
            self.state.debounce_pending = false;
            return Task::none();
        }

        self.state.searching = true;
        self.state.debounce_pending = true;
        let delay = self.options.debounce;
        if delay.is_zero() {
            return Task::done(Message::SearchDebounced(text));
        }

        Task::perform(
            async move {
                tokio::time::sleep(delay).await;
                text
            },
            Message::SearchDebounced,
        )
    }

    fn dispatch_search(&mut self) -> Task {
        let ticket = SearchTicket {
            epoch: self.state.search_epoch.advance(),
            query: self.state.query.clone(),
            source_region: self.state.source.region_code,
        };
        self.state.searching = true;

        let catalog = Arc::clone(&self.catalog);
        let query = self.state.query.clone();
        let source = self.state.source;
        let page_size = self.options.page_size;

        Task::perform(
            async move {
                search_candidates(catalog.as_ref(), &query, source, page_size)
                    .await
            },
            move |candidates| Message::SearchCompleted { ticket, candidates },
        )
    }

    fn on_search_completed(
        &mut self,
        ticket: SearchTicket,
        candidates: Vec<marquee_model::CandidateMovie>,
    ) -> Task {
        if !self.state.search_is_current(&ticket) {
            debug!(query = %ticket.query, "dropping stale search results");
            return Task::none();
        }

        self.state.searching = false;
        self.state.candidates = candidates;
        self.state.visible = self.options.initial_window;

        if self.options.selection_mode != SelectionMode::Implicit {
            return Task::none();
        }

        match self.state.candidates.first().map(|candidate| candidate.id) {
            Some(id)
                if self.state.selected == Some(id)
                    && (self.state.loading || self.state.detail.is_some()) =>
            {
                Task::none()
            }
            Some(id) => self.choose(id),
            None => {
                self.state.clear_selection();
                Task::none()
            }
        }
    }

    fn choose(&mut self, id: MovieId) -> Task {
        // Re-choosing the same movie keeps its back-translation cache.
        let kept = (self.state.selected == Some(id)).then(|| {
            (
                std::mem::take(&mut self.state.hints),
                std::mem::take(&mut self.state.pending_hints),
            )
        });
        self.state.clear_selection();
        if let Some((hints, pending_hints)) = kept {
            self.state.hints = hints;
            self.state.pending_hints = pending_hints;
        }
        self.state.selected = Some(id);
        self.state.loading = true;

        let ticket = DetailTicket {
            epoch: self.state.detail_epoch.advance(),
            query: self.state.query.clone(),
            movie_id: id,
        };
        let catalog = Arc::clone(&self.catalog);

        Task::perform(
            async move { fetch_detail(catalog.as_ref(), id).await },
            move |result| Message::DetailLoaded { ticket, result },
        )
    }

    fn on_detail_loaded(
        &mut self,
        ticket: DetailTicket,
        result: Result<marquee_model::MovieDetail, StageError>,
    ) -> Task {
        if !self.state.detail_is_current(&ticket) {
            debug!(movie_id = %ticket.movie_id, "dropping stale movie detail");
            return Task::none();
        }

        self.state.loading = false;
        self.state.detail = Some(match result {
            Ok(detail) => DetailOutcome::Loaded(detail),
            Err(err) => {
                warn!(error = %err, "selected movie could not be loaded");
                DetailOutcome::NotFound(ticket.movie_id)
            }
        });

        self.refresh_display()
    }

    fn on_back_translated(
        &mut self,
        key: BackTranslationKey,
        result: Result<Option<String>, StageError>,
    ) -> Task {
        self.state.pending_hints.remove(&key);
        if self.state.selected != Some(key.movie_id) {
            debug!(movie_id = %key.movie_id, "dropping back-translation for a previous selection");
            return Task::none();
        }

        let hint = result.unwrap_or_else(|err| {
            debug!(error = %err, "back-translation suppressed");
            None
        });
        self.state.hints.insert(key, hint);

        self.refresh_display()
    }

    fn on_source_changed(&mut self, language: &'static Language) -> Task {
        let previous = self.state.source;
        if previous.same_region(language) {
            return Task::none();
        }

        self.state.source = language;
        if self.state.target.same_region(language) {
            info!(
                target_region = previous.region_code,
                "source now matches target; swapping target"
            );
            self.state.target = previous;
        }
        self.analytics
            .record_language_changed(LanguageSide::Source, previous, language);

        // A pending debounce searches with the new source when it fires.
        let search = if self.state.query.trim().is_empty()
            || self.state.debounce_pending
        {
            Task::none()
        } else {
            self.dispatch_search()
        };
        let refresh = self.refresh_display();

        Task::batch([search, refresh])
    }

    fn on_target_changed(&mut self, language: &'static Language) -> Task {
        if language.same_region(self.state.source) {
            warn!(
                region = language.region_code,
                "target must differ from source; ignoring"
            );
            return Task::none();
        }

        let previous = self.state.target;
        if previous.same_region(language) {
            return Task::none();
        }

        self.state.target = language;
        self.analytics
            .record_language_changed(LanguageSide::Target, previous, language);

        self.refresh_display()
    }

    /// Recompute the display from scratch and request the back-translation
    /// it is missing, if any.
    fn refresh_display(&mut self) -> Task {
        let source = self.state.source;
        let target = self.state.target;

        let (model, key, movie_id) = match &self.state.detail {
            None => {
                self.state.display = None;
                return Task::none();
            }
            Some(DetailOutcome::NotFound(_)) => {
                self.state.display =
                    Some(DisplayModel::not_found(self.strings.no_movie_found()));
                return Task::none();
            }
            Some(DetailOutcome::Loaded(detail)) => {
                let key = back_translation_key(detail, source, target);
                let back_translation = key.as_ref().and_then(|key| {
                    self.state
                        .hints
                        .get_key_value(key)
                        .map(|(key, hint)| (key, hint.as_deref()))
                });
                let model = resolve_display(
                    DisplayInputs {
                        detail,
                        source,
                        target,
                        query: &self.state.query,
                        back_translation,
                    },
                    &self.strings,
                );
                (model, key, detail.id)
            }
        };

        self.record_view(movie_id, &model);
        self.state.display = Some(model);

        match key {
            Some(key) => self.request_back_translation(key),
            None => Task::none(),
        }
    }

    fn record_view(&mut self, movie_id: MovieId, model: &DisplayModel) {
        let (source, target) = (self.state.source, self.state.target);
        let view = (movie_id, source.region_code, target.region_code);
        if self.state.last_viewed == Some(view) {
            return;
        }
        self.state.last_viewed = Some(view);
        self.analytics.record_translation_viewed(
            &model.translated_title,
            source,
            target,
            model.translated_title_found,
        );
    }

    /// One attempt per key; never while the quota breaker is tripped.
    fn request_back_translation(&mut self, key: BackTranslationKey) -> Task {
        if self.state.hints.contains_key(&key)
            || self.state.pending_hints.contains(&key)
        {
            return Task::none();
        }
        let Some(translator) = self.translator.clone() else {
            return Task::none();
        };
        if translator.is_quota_exhausted() {
            debug!("translation quota exhausted; skipping back-translation");
            return Task::none();
        }

        self.state.pending_hints.insert(key.clone());
        let from = self.state.target.locale_hint();
        let to = self.state.source.locale_hint();
        let text = key.translated_title.clone();

        Task::perform(
            async move {
                translator
                    .translate(&text, &from, &to)
                    .await
                    .map_err(StageError::BackTranslationUnavailable)
            },
            move |result| Message::BackTranslated { key, result },
        )
    }
}
