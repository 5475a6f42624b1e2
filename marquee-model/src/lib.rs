//! Core data model definitions shared across Marquee crates.
//!
//! Alternate titles are keyed by *region* code (`BR`, `PT`, `TW`) while
//! poster art is keyed by bare *language* code (`pt`, `zh`). Regions sharing
//! a language share a poster pool but never a title pool.
#![allow(missing_docs)]

pub mod display;
pub mod error;
pub mod ids;
pub mod image;
pub mod language;
pub mod movie;
pub mod selection;

pub use display::DisplayModel;
pub use error::{ModelError, Result as ModelResult};
pub use ids::MovieId;
pub use image::PosterSize;
pub use language::{ENGLISH_LANG_CODE, LANGUAGES, Language};
pub use movie::{CandidateMovie, DEFAULT_TITLE_KEY, MovieDetail};
pub use selection::SelectionMode;
