//! Fire-and-forget usage events.

use std::fmt;

use marquee_model::Language;
use tracing::info;

/// Which side of the language pair changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSide {
    Source,
    Target,
}

impl fmt::Display for LanguageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageSide::Source => f.write_str("source"),
            LanguageSide::Target => f.write_str("target"),
        }
    }
}

/// Receives usage events. Implementations must not block and never fail
/// the caller.
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsSink: Send + Sync {
    fn record_search(&self, query: &str, source: &Language);

    fn record_translation_viewed(
        &self,
        title: &str,
        source: &Language,
        target: &Language,
        found: bool,
    );

    fn record_language_changed(
        &self,
        side: LanguageSide,
        from: &Language,
        to: &Language,
    );
}

/// Emits events on the `analytics` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn record_search(&self, query: &str, source: &Language) {
        info!(target: "analytics", event = "search", query, source = source.region_code);
    }

    fn record_translation_viewed(
        &self,
        title: &str,
        source: &Language,
        target: &Language,
        found: bool,
    ) {
        info!(
            target: "analytics",
            event = "translation_viewed",
            title,
            source = source.region_code,
            target = target.region_code,
            found
        );
    }

    fn record_language_changed(
        &self,
        side: LanguageSide,
        from: &Language,
        to: &Language,
    ) {
        info!(
            target: "analytics",
            event = "language_changed",
            side = %side,
            from = from.region_code,
            to = to.region_code
        );
    }
}
