//! Search components.
//!
//! Provides the search panel (input, clear, result count, export, drop
//! target) and the Cmd/Ctrl+K focus shortcut.

use leptos::{ev, prelude::*};
use storymaster_core::{Action, search::query_from_drop};

use crate::controller::use_controller;

/// Whether a key event is the Cmd+K (Mac) or Ctrl+K shortcut.
pub fn is_search_shortcut(key: &str, meta: bool, ctrl: bool) -> bool {
    key.eq_ignore_ascii_case("k") && (meta || ctrl)
}

/// Search input with result count and export.
#[component]
pub fn SearchPanel() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();
    let query = controller.query();
    let filtered = controller.filtered();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let dragging = RwSignal::new(false);

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        let payload = ev
            .data_transfer()
            .and_then(|data| data.get_data("text/plain").ok())
            .unwrap_or_default();
        match query_from_drop(&payload) {
            Some(query) => controller.dispatch(Action::SetSearchQuery(query)),
            None => log::debug!("ignoring drop without plain text"),
        }
    };

    view! {
      <section
        class="storymaster-search"
        class:dragging=move || dragging.get()
        aria-label=move || t.get().ui.search_label
        on:dragover=move |ev: web_sys::DragEvent| {
          ev.prevent_default();
          dragging.set(true);
        }
        on:dragleave=move |_| dragging.set(false)
        on:drop=on_drop
      >
        <SearchShortcut input_ref=input_ref />
        <div class="storymaster-search-box">
          <input
            node_ref=input_ref
            type="search"
            class="storymaster-search-input"
            aria-label=move || t.get().ui.search_label
            placeholder=move || t.get().ui.search_placeholder
            prop:value=move || query.get()
            on:input=move |ev| {
              controller.dispatch(Action::SetSearchQuery(event_target_value(&ev)));
            }
          />
          <Show when=move || !query.with(String::is_empty)>
            <button
              type="button"
              class="storymaster-search-clear"
              on:click=move |_| controller.dispatch(Action::ClearSearch)
            >
              {move || t.get().ui.clear_search}
            </button>
          </Show>
        </div>
        <div class="storymaster-search-meta">
          <span class="storymaster-search-count" aria-live="polite">
            {move || filtered.with(Vec::len)}
            " "
            {move || t.get().ui.results_suffix}
          </span>
          <span class="storymaster-search-hint">{move || t.get().ui.drop_hint}</span>
          <button
            type="button"
            class="storymaster-action"
            disabled=move || filtered.with(Vec::is_empty)
            on:click=move |_| controller.export()
          >
            "⬇ "
            {move || t.get().ui.export}
          </button>
        </div>
      </section>
    }
}

/// Focuses the search input on Cmd/Ctrl + K.
///
/// The window listener is removed when the component is unmounted.
#[component]
#[allow(clippy::unused_unit)]
pub fn SearchShortcut(
    /// Input to focus.
    input_ref: NodeRef<leptos::html::Input>,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if is_search_shortcut(&ev.key(), ev.meta_key(), ev.ctrl_key()) {
            ev.prevent_default();
            if let Some(input) = input_ref.get() {
                if let Err(err) = input.focus() {
                    log::debug!("could not focus search input: {err:?}");
                }
            }
        }
    });
    on_cleanup(move || handle.remove());
}
