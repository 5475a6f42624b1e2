use marquee_model::MovieId;
use thiserror::Error;

use crate::providers::ProviderError;

/// Failures of individual resolution stages.
///
/// None of these reach the user as raw errors: each maps to a sentinel or
/// an absent value in the display model.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("no candidates for '{query}'")]
    NoCandidates {
        query: String,
        #[source]
        cause: Option<ProviderError>,
    },

    #[error("movie {id} could not be fetched: {source}")]
    MovieNotFound {
        id: MovieId,
        #[source]
        source: ProviderError,
    },

    #[error("no title available for region {region}")]
    TranslationUnavailable { region: String },

    #[error("back-translation unavailable: {0}")]
    BackTranslationUnavailable(#[source] ProviderError),
}

pub type Result<T> = std::result::Result<T, StageError>;
