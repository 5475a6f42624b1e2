//! Text-to-speech output port.

use tracing::info;

#[cfg_attr(test, mockall::automock)]
pub trait SpeechOutput: Send + Sync {
    /// Speak `text` with a voice for the bare language code `lang_code`.
    fn speak(&self, text: &str, lang_code: &str);
}

/// Headless stand-in that only logs what would be spoken.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggedSpeech;

impl SpeechOutput for LoggedSpeech {
    fn speak(&self, text: &str, lang_code: &str) {
        info!(lang = lang_code, text, "speak");
    }
}
