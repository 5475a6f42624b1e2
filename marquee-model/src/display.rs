/// The resolved view of one movie for a source/target language pair.
///
/// Derived data: always recomputed in full from the loaded detail and the
/// current language selection, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DisplayModel {
    pub original_title: String,
    pub original_year: Option<String>,
    pub original_poster: Option<String>,
    /// Localized title, or a "no title found" / "no movie found" sentinel.
    pub translated_title: String,
    /// `false` whenever `translated_title` holds a sentinel.
    pub translated_title_found: bool,
    pub translated_poster: Option<String>,
    pub back_translation_hint: Option<String>,
}

impl DisplayModel {
    /// Model shown when the selected movie could not be fetched at all.
    pub fn not_found(sentinel: impl Into<String>) -> Self {
        let sentinel = sentinel.into();
        Self {
            original_title: sentinel.clone(),
            translated_title: sentinel,
            ..Self::default()
        }
    }

    /// Speech playback is only meaningful for a real localized title.
    pub fn is_speakable(&self) -> bool {
        self.translated_title_found && !self.translated_title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_fills_both_title_slots() {
        let model = DisplayModel::not_found("No movie found");
        assert_eq!(model.original_title, "No movie found");
        assert_eq!(model.translated_title, "No movie found");
        assert!(!model.is_speakable());
        assert!(model.original_poster.is_none());
    }
}
