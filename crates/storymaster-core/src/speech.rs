//! Text-to-speech playback.

use crate::{capability::Capability, language::Language};

/// A request to vocalize text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    /// Voice locale tag, e.g. `en-US`.
    pub locale: &'static str,
}

impl Utterance {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            locale: language.voice_locale(),
        }
    }
}

/// The platform speech synthesizer.
pub trait SpeechSynth {
    /// Stop the current utterance and drop anything queued.
    fn cancel(&self);

    /// Start speaking.
    fn speak(&self, utterance: &Utterance);
}

/// Speak `text` in `language`, pre-empting whatever is playing.
///
/// At most one utterance is active: every request cancels the synthesizer,
/// and blank text stops playback without starting anything new. Without a
/// synthesizer this is a no-op.
pub fn speak<S: SpeechSynth>(synth: &Capability<S>, text: &str, language: Language) {
    let Some(synth) = synth.get() else {
        log::debug!("speech synthesis unavailable, skipping playback");
        return;
    };

    synth.cancel();
    if text.trim().is_empty() {
        return;
    }

    let utterance = Utterance::new(text, language);
    log::debug!("speaking {} chars in {}", utterance.text.len(), utterance.locale);
    synth.speak(&utterance);
}
