use std::collections::{HashMap, HashSet};

use marquee_model::{
    CandidateMovie, DisplayModel, Language, MovieDetail, MovieId,
};

use super::messages::{DetailTicket, SearchTicket};
use crate::pipeline::BackTranslationKey;

/// Monotonic request counter. Results carry the value current at dispatch
/// and are only applied if it is still current on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestEpoch(u64);

impl RequestEpoch {
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn current(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Loaded(MovieDetail),
    NotFound(MovieId),
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) query: String,
    pub(crate) source: &'static Language,
    pub(crate) target: &'static Language,
    pub(crate) candidates: Vec<CandidateMovie>,
    pub(crate) visible: usize,
    pub(crate) searching: bool,
    /// A `SearchDebounced` for the current query has not fired yet.
    pub(crate) debounce_pending: bool,
    pub(crate) selected: Option<MovieId>,
    pub(crate) loading: bool,
    pub(crate) detail: Option<DetailOutcome>,
    pub(crate) display: Option<DisplayModel>,
    pub(crate) hints: HashMap<BackTranslationKey, Option<String>>,
    pub(crate) pending_hints: HashSet<BackTranslationKey>,
    pub(crate) search_epoch: RequestEpoch,
    pub(crate) detail_epoch: RequestEpoch,
    pub(crate) last_viewed: Option<(MovieId, &'static str, &'static str)>,
}

impl SessionState {
    pub fn new(
        source: &'static Language,
        target: &'static Language,
        initial_window: usize,
    ) -> Self {
        Self {
            query: String::new(),
            source,
            target,
            candidates: Vec::new(),
            visible: initial_window,
            searching: false,
            debounce_pending: false,
            selected: None,
            loading: false,
            detail: None,
            display: None,
            hints: HashMap::new(),
            pending_hints: HashSet::new(),
            search_epoch: RequestEpoch::default(),
            detail_epoch: RequestEpoch::default(),
            last_viewed: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn source(&self) -> &'static Language {
        self.source
    }

    pub fn target(&self) -> &'static Language {
        self.target
    }

    /// All fetched candidates, ranked.
    pub fn candidates(&self) -> &[CandidateMovie] {
        &self.candidates
    }

    /// The revealed prefix of [`Self::candidates`].
    pub fn visible_candidates(&self) -> &[CandidateMovie] {
        let end = self.visible.min(self.candidates.len());
        &self.candidates[..end]
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.candidates.len()
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn selected(&self) -> Option<MovieId> {
        self.selected
    }

    /// True while the selected movie's detail is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn detail(&self) -> Option<&DetailOutcome> {
        self.detail.as_ref()
    }

    pub fn loaded_detail(&self) -> Option<&MovieDetail> {
        match &self.detail {
            Some(DetailOutcome::Loaded(detail)) => Some(detail),
            _ => None,
        }
    }

    pub fn display(&self) -> Option<&DisplayModel> {
        self.display.as_ref()
    }

    pub(crate) fn search_is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.epoch == self.search_epoch.current()
            && ticket.query == self.query
            && ticket.source_region == self.source.region_code
    }

    pub(crate) fn detail_is_current(&self, ticket: &DetailTicket) -> bool {
        ticket.epoch == self.detail_epoch.current()
            && self.selected == Some(ticket.movie_id)
            && ticket.query == self.query
    }

    /// Forget the selection and everything derived from it. In-flight
    /// detail fetches become stale.
    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
        self.loading = false;
        self.detail = None;
        self.display = None;
        self.hints.clear();
        self.pending_hints.clear();
        self.last_viewed = None;
        self.detail_epoch.advance();
    }
}
