//! Title resolution and localization merge for Marquee.
//!
//! A query is searched in the catalog, narrowed to one movie, and its
//! alternate titles and posters are merged into a [`DisplayModel`] for a
//! source/target language pair. The [`session`] module owns the
//! interactive state machine; [`pipeline`] holds the stages it drives.
//!
//! [`DisplayModel`]: marquee_model::DisplayModel
#![allow(missing_docs)]

pub mod analytics;
pub mod error;
pub mod pipeline;
pub mod providers;
pub mod session;
pub mod speech;
pub mod strings;

pub use analytics::{AnalyticsSink, LanguageSide, TracingAnalytics};
pub use error::{Result, StageError};
pub use providers::{
    BackTranslator, CatalogApi, MyMemoryTranslator, ProviderError, TmdbCatalog,
};
pub use session::{Message, Runtime, Session, SessionOptions, Task};
pub use speech::{LoggedSpeech, SpeechOutput};
pub use strings::UiStrings;
