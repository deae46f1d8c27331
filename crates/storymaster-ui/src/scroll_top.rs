//! Floating "back to top" control.

use leptos::prelude::*;

use crate::{controller::use_controller, platform::scroll::scroll_to_top};

/// Appears once the page is scrolled past the configured threshold.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();
    let state = controller.state();
    let visible = Memo::new(move |_| state.with(|s| s.scroll_past_threshold));

    view! {
      <Show when=move || visible.get()>
        <button
          type="button"
          class="storymaster-scroll-top"
          aria-label=move || t.get().ui.scroll_top
          title=move || t.get().ui.scroll_top
          on:click=|_| scroll_to_top()
        >
          "↑"
        </button>
      </Show>
    }
}
