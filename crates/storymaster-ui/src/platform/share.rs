//! `navigator.share` and `navigator.clipboard` adapters.
//!
//! Both are looked up through `Reflect` so that a browser lacking them is
//! detected once instead of throwing at call time.

use js_sys::{Function, Object, Promise, Reflect};
use storymaster_core::{ClipboardService, PlatformError, ShareService};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Navigator;

use super::js_error;

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

async fn settle(result: Result<JsValue, JsValue>) -> Result<(), PlatformError> {
    let promise = Promise::from(result.map_err(js_error)?);
    JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
}

/// The native share sheet.
#[derive(Clone)]
pub struct WebShare {
    navigator: Navigator,
    share: Function,
}

impl WebShare {
    pub fn detect() -> Option<Self> {
        let navigator = web_sys::window()?.navigator();
        let share = method(&navigator, "share")?;
        Some(Self { navigator, share })
    }
}

impl ShareService for WebShare {
    async fn share(&self, title: &str, text: &str) -> Result<(), PlatformError> {
        let data = Object::new();
        Reflect::set(&data, &"title".into(), &title.into()).map_err(js_error)?;
        Reflect::set(&data, &"text".into(), &text.into()).map_err(js_error)?;
        settle(self.share.call1(&self.navigator, &data)).await
    }
}

/// The asynchronous clipboard.
#[derive(Clone)]
pub struct WebClipboard {
    clipboard: JsValue,
    write_text: Function,
}

impl WebClipboard {
    pub fn detect() -> Option<Self> {
        let navigator = web_sys::window()?.navigator();
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return None;
        }
        let write_text = method(&clipboard, "writeText")?;
        Some(Self {
            clipboard,
            write_text,
        })
    }
}

impl ClipboardService for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        settle(self.write_text.call1(&self.clipboard, &text.into())).await
    }
}
