//! The three resolution stages: catalog search, detail fan-out, and the
//! pure display-model resolution.

pub mod detail;
pub mod resolve;
pub mod search;

pub use detail::{fetch_detail, merge_detail};
pub use resolve::{
    BackTranslationKey, DisplayInputs, ORIGINAL_POSTER_CHAIN,
    ORIGINAL_TITLE_CHAIN, PosterSource, TRANSLATED_POSTER_CHAIN,
    TRANSLATED_TITLE_CHAIN, TitleSource, accept_hint, back_translation_key,
    resolve_display, resolve_poster, resolve_title,
};
pub use search::{rank_hits, search_candidates, search_catalog};
