//! Call-to-action band and footer.

use leptos::prelude::*;

use crate::controller::use_controller;

#[component]
pub fn CtaSection() -> impl IntoView {
    let t = use_controller().translation();

    view! {
      <section class="storymaster-cta-section">
        <h2>{move || t.get().ui.cta_heading}</h2>
        <p>{move || t.get().ui.cta_body}</p>
        <a href="#top" class="storymaster-cta">
          {move || t.get().cta}
        </a>
      </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let t = use_controller().translation();

    view! {
      <footer class="storymaster-footer">
        <p>"© " {move || t.get().ui.footer}</p>
      </footer>
    }
}
