//! Viewport scroll position.

use leptos::{ev, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Current vertical scroll offset, `0.0` outside a browser.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

/// Report the scroll offset now and on every `scroll` event until the
/// owning reactive scope is cleaned up.
pub fn track_scroll(on_scroll: impl Fn(f64) + 'static) {
    on_scroll(scroll_offset());
    let handle = window_event_listener(ev::scroll, move |_| on_scroll(scroll_offset()));
    on_cleanup(move || {
        log::debug!("releasing scroll listener");
        handle.remove();
    });
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
