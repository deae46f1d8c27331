//! Browser adapters.
//!
//! Capabilities are feature-tested once in [`Platform::detect`] and injected
//! through the view controller; nothing else probes `window` or `navigator`.

pub mod document;
pub mod download;
pub mod scroll;
pub mod share;
pub mod speech;

use storymaster_core::{Capability, PlatformError};
use wasm_bindgen::{JsCast, JsValue};

pub use share::{WebClipboard, WebShare};
pub use speech::WebSpeech;

/// The browser services the page can use.
#[derive(Clone, Default)]
pub struct Platform {
    pub speech: Capability<WebSpeech>,
    pub share: Capability<WebShare>,
    pub clipboard: Capability<WebClipboard>,
}

impl Platform {
    /// Feature-test the running browser.
    pub fn detect() -> Self {
        let platform = Self {
            speech: WebSpeech::detect().into(),
            share: WebShare::detect().into(),
            clipboard: WebClipboard::detect().into(),
        };
        log::info!(
            "platform capabilities: speech={} share={} clipboard={}",
            platform.speech.is_available(),
            platform.share.is_available(),
            platform.clipboard.is_available()
        );
        platform
    }
}

/// Map a rejected promise or thrown value to a [`PlatformError`].
///
/// `AbortError` is how browsers report a dismissed share sheet.
pub(crate) fn js_error(err: JsValue) -> PlatformError {
    if let Some(exception) = err.dyn_ref::<web_sys::DomException>() {
        if exception.name() == "AbortError" {
            return PlatformError::Cancelled;
        }
        return PlatformError::rejected(format!("{}: {}", exception.name(), exception.message()));
    }
    PlatformError::rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
