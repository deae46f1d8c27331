//! `window.speechSynthesis` adapter.

use js_sys::Reflect;
use storymaster_core::{SpeechSynth, Utterance};
use wasm_bindgen::JsValue;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

/// The browser's speech synthesizer.
#[derive(Clone)]
pub struct WebSpeech {
    synth: SpeechSynthesis,
}

impl WebSpeech {
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let exposed = Reflect::has(&window, &JsValue::from_str("speechSynthesis")).unwrap_or(false);
        if !exposed {
            return None;
        }
        window.speech_synthesis().ok().map(|synth| Self { synth })
    }
}

impl SpeechSynth for WebSpeech {
    fn cancel(&self) {
        self.synth.cancel();
    }

    fn speak(&self, utterance: &Utterance) {
        match SpeechSynthesisUtterance::new_with_text(&utterance.text) {
            Ok(request) => {
                request.set_lang(utterance.locale);
                self.synth.speak(&request);
            }
            Err(err) => log::warn!("could not create utterance: {err:?}"),
        }
    }
}
