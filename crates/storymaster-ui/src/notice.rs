//! Transient status toast.

use leptos::prelude::*;

use crate::controller::use_controller;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let controller = use_controller();
    let t = controller.translation();
    let notice = controller.notice();

    view! {
      <Show when=move || notice.with(Option::is_some)>
        <div
          class="storymaster-notice"
          role="status"
          aria-live="polite"
          on:click=move |_| controller.dismiss_notice()
        >
          {move || notice.get().map(|n| n.kind.message(t.get()))}
        </div>
      </Show>
    }
}
