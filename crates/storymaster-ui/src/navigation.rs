//! Top navigation bar with language, font size and theme controls.

use leptos::prelude::*;
use storymaster_core::{Action, FontSize, Language, Theme};

use crate::controller::use_controller;

/// Main navigation component.
#[component]
pub fn NavBar() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();

    view! {
      <nav class="storymaster-nav" aria-label="Main navigation">
        <a href="#top" class="storymaster-brand">
          <span class="storymaster-brand-name">{move || t.get().title}</span>
          <span class="storymaster-brand-tagline">{move || t.get().subtitle}</span>
        </a>
        <div class="storymaster-nav-controls">
          <LanguageSelect />
          <FontSizeControl />
          <ThemeToggle />
        </div>
      </nav>
    }
}

/// Language selector.
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();
    let language = controller.language();

    let on_change = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        match code.parse::<Language>() {
            Ok(lang) => controller.dispatch(Action::SetLanguage(lang)),
            Err(err) => log::warn!("ignoring language selection: {err}"),
        }
    };

    view! {
      <label class="storymaster-language">
        <span class="storymaster-visually-hidden">{move || t.get().ui.language}</span>
        <select
          class="storymaster-language-select"
          prop:value=move || language.get().code()
          on:change=on_change
        >
          {Language::ALL
            .into_iter()
            .map(|lang| {
              view! {
                <option value=lang.code() lang=lang.code()>
                  {lang.native_name()}
                </option>
              }
            })
            .collect_view()}
        </select>
      </label>
    }
}

/// Font size preset buttons.
#[component]
pub fn FontSizeControl() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();
    let state = controller.state();
    let current = Memo::new(move |_| state.with(|s| s.font_size));

    view! {
      <div class="storymaster-font-size" role="group" aria-label=move || t.get().ui.font_size>
        {FontSize::ALL
          .into_iter()
          .map(|size| {
            let active = move || current.get() == size;
            view! {
              <button
                type="button"
                class="storymaster-font-size-button"
                class:active=active
                aria-pressed=move || active().to_string()
                on:click=move |_| controller.dispatch(Action::SetFontSize(size))
              >
                {size.label()}
              </button>
            }
          })
          .collect_view()}
      </div>
    }
}

/// Dark/light theme switch.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();
    let state = controller.state();
    let theme = Memo::new(move |_| state.with(|s| s.theme));

    view! {
      <button
        type="button"
        class="storymaster-theme-toggle"
        aria-label=move || t.get().ui.toggle_theme
        title=move || t.get().ui.toggle_theme
        on:click=move |_| controller.dispatch(Action::ToggleTheme)
      >
        {move || match theme.get() {
          Theme::Dark => "☀️",
          Theme::Light => "🌙",
        }}
      </button>
    }
}
