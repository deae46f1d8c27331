//! Tip and example sections.

use leptos::prelude::*;
use storymaster_core::{ContentItem, ContentKind, content::of_kind, highlight};

use crate::controller::use_controller;

/// Grid of storytelling tips matching the current query.
#[component]
pub fn TipsGrid() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();

    view! {
      <ContentSection
        kind=ContentKind::Tip
        anchor="tips"
        list_class="storymaster-tips-grid"
        heading=Signal::derive(move || t.get().ui.tips_heading)
      />
    }
}

/// List of worked examples matching the current query.
#[component]
pub fn ExamplesList() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();

    view! {
      <ContentSection
        kind=ContentKind::Example
        anchor="examples"
        list_class="storymaster-examples-list"
        heading=Signal::derive(move || t.get().ui.examples_heading)
      />
    }
}

/// A titled section of one content kind, hidden when nothing matches.
#[component]
fn ContentSection(
    kind: ContentKind,
    anchor: &'static str,
    list_class: &'static str,
    heading: Signal<&'static str>,
) -> impl IntoView {
    let filtered = use_controller().filtered();
    let items = Memo::new(move |_| filtered.with(|all| of_kind(all, kind)));

    view! {
      <Show when=move || !items.with(Vec::is_empty)>
        <section class="storymaster-section" id=anchor>
          <h2 class="storymaster-section-title">{move || heading.get()}</h2>
          <ul class=list_class>
            <For
              each=move || items.get()
              key=|item| item.title.clone()
              children=move |item| view! { <ContentCard item=item /> }
            />
          </ul>
        </section>
      </Show>
    }
}

/// One tip or example with listen and share actions.
#[component]
pub fn ContentCard(
    /// The item to display.
    item: ContentItem,
) -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();
    let query = controller.query();

    let spoken = item.spoken_text();
    let share_title = item.title.clone();
    let share_text = item.description.clone();
    let card_class = if item.is_tip() {
        "storymaster-card storymaster-card-tip"
    } else {
        "storymaster-card storymaster-card-example"
    };

    view! {
      <li class=card_class>
        <span class="storymaster-card-icon" aria-hidden="true">
          {item.icon.clone()}
        </span>
        <h3 class="storymaster-card-title">
          <Highlighted text=item.title.clone() query=query.into() />
        </h3>
        <p class="storymaster-card-desc">
          <Highlighted text=item.description.clone() query=query.into() />
        </p>
        <div class="storymaster-card-actions">
          <button
            type="button"
            class="storymaster-action"
            on:click=move |_| controller.speak(&spoken)
          >
            "🔊 "
            {move || t.get().ui.listen}
          </button>
          <button
            type="button"
            class="storymaster-action"
            on:click=move |_| controller.share(share_title.clone(), share_text.clone())
          >
            "↗ "
            {move || t.get().ui.share}
          </button>
        </div>
      </li>
    }
}

/// Text with query matches wrapped in `<mark>`.
#[component]
fn Highlighted(text: String, query: Signal<String>) -> impl IntoView {
    move || {
        query.with(|q| highlight(&text, q))
            .into_iter()
            .map(|segment| {
                if segment.matched {
                    view! { <mark>{segment.text}</mark> }.into_any()
                } else {
                    segment.text.into_any()
                }
            })
            .collect_view()
    }
}

/// Shown when the query matches nothing at all.
#[component]
pub fn NoResults() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();
    let filtered = controller.filtered();
    let query = controller.query();

    view! {
      <Show when=move || filtered.with(Vec::is_empty)>
        <div class="storymaster-no-results" role="status">
          <p>{move || t.get().ui.no_results}</p>
          <p class="storymaster-no-results-query">"\"" {move || query.get()} "\""</p>
        </div>
      </Show>
    }
}
