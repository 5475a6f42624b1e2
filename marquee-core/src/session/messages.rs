use marquee_model::{CandidateMovie, Language, MovieDetail, MovieId};

use crate::error::StageError;
use crate::pipeline::BackTranslationKey;

#[derive(Debug)]
pub enum Message {
    /// Raw text from the search box.
    QueryChanged(String),
    SearchDebounced(String),
    SearchCompleted {
        ticket: SearchTicket,
        candidates: Vec<CandidateMovie>,
    },
    LoadMore,
    CandidateChosen(MovieId),
    DetailLoaded {
        ticket: DetailTicket,
        result: Result<MovieDetail, StageError>,
    },
    BackTranslated {
        key: BackTranslationKey,
        result: Result<Option<String>, StageError>,
    },
    SourceLanguageChanged(&'static Language),
    TargetLanguageChanged(&'static Language),
}

/// Identifies the search a result belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub(crate) epoch: u64,
    pub query: String,
    pub source_region: &'static str,
}

/// Identifies the selection a detail fetch was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub(crate) epoch: u64,
    pub query: String,
    pub movie_id: MovieId,
}
