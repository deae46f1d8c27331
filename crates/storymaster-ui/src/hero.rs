//! Hero header.

use leptos::prelude::*;

use crate::controller::use_controller;

#[component]
pub fn Hero() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();

    let listen = move |_| {
        let record = t.get_untracked();
        controller.speak(&format!("{}. {}", record.hero_title, record.hero_desc));
    };

    let share = move |_| {
        let record = t.get_untracked();
        controller.share(record.title.to_string(), record.hero_title.to_string());
    };

    view! {
      <header class="storymaster-hero" id="top">
        <h1 class="storymaster-hero-title">{move || t.get().hero_title}</h1>
        <p class="storymaster-hero-desc">{move || t.get().hero_desc}</p>
        <div class="storymaster-hero-actions">
          <a href="#tips" class="storymaster-cta">
            {move || t.get().cta}
          </a>
          <button type="button" class="storymaster-action" on:click=listen>
            "🔊 "
            {move || t.get().ui.listen}
          </button>
          <button type="button" class="storymaster-action" on:click=share>
            "↗ "
            {move || t.get().ui.share}
          </button>
        </div>
      </header>
    }
}
