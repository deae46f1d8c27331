//! File download through a temporary object URL.

use std::time::Duration;

use js_sys::Array;
use leptos::prelude::set_timeout;
use storymaster_core::{ExportFile, PlatformError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::js_error;

/// How long the object URL outlives the click that started the download.
const REVOKE_DELAY: Duration = Duration::from_secs(1);

/// Offer `file` to the user as a download.
pub fn download(file: &ExportFile) -> Result<(), PlatformError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(PlatformError::Unavailable("document"))?;
    let body = document.body().ok_or(PlatformError::Unavailable("document body"))?;

    let parts = Array::of1(&JsValue::from_str(&file.contents));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;
    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| PlatformError::rejected("created element is not an anchor"))?;

    anchor.set_href(&url);
    anchor.set_download(&file.name);
    // Detached anchors are ignored by some browsers.
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    anchor.remove();

    log::info!("exported {} ({} bytes)", file.name, file.contents.len());
    set_timeout(
        move || {
            if let Err(err) = Url::revoke_object_url(&url) {
                log::warn!("failed to revoke export URL: {}", js_error(err));
            }
        },
        REVOKE_DELAY,
    );
    Ok(())
}
