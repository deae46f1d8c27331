//! Browser tests for the DOM adapters.
//!
//! Run with `wasm-pack test --headless --firefox crates/storymaster-ui`.

#![cfg(target_arch = "wasm32")]

use std::{cell::Cell, rc::Rc};

use leptos::{mount::mount_to, prelude::*};
use storymaster_core::{
    Action, Config, DocumentEffect, ExportFile, FontSize, Language, TextDirection, Theme,
    ViewState, assemble,
    config::{ExportConfig, ViewConfig},
};
use storymaster_ui::{
    NoResults, ScrollToTop, SearchShortcut, ViewController,
    platform::{
        Platform,
        document::{self, DARK_CLASS, FONT_SIZE_ATTR},
        download::download,
        scroll::{self, scroll_offset},
    },
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root() -> web_sys::Element {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap()
}

/// A fresh element attached to the body to mount components into.
fn container() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

/// Let pending reactive effects flush.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn fire_scroll() {
    let event = web_sys::Event::new("scroll").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn has(parent: &web_sys::HtmlElement, selector: &str) -> bool {
    parent.query_selector(selector).unwrap().is_some()
}

#[wasm_bindgen_test]
fn hebrew_switches_document_to_rtl() {
    let state = ViewState::new(&Config::default());
    let to_hebrew = state.transition(Action::SetLanguage(Language::He), &ViewConfig::default());
    document::apply_all(to_hebrew.effects);
    assert_eq!(root().get_attribute("dir").as_deref(), Some("rtl"));
    assert_eq!(root().get_attribute("lang").as_deref(), Some("he"));

    let back = to_hebrew
        .state
        .transition(Action::SetLanguage(Language::En), &ViewConfig::default());
    document::apply_all(back.effects);
    assert_eq!(root().get_attribute("dir").as_deref(), Some("ltr"));
    assert_eq!(root().get_attribute("lang").as_deref(), Some("en"));
}

#[wasm_bindgen_test]
fn theme_toggles_single_root_class() {
    document::apply(DocumentEffect::Theme(Theme::Dark));
    assert!(root().class_list().contains(DARK_CLASS));

    document::apply(DocumentEffect::Theme(Theme::Light));
    assert!(!root().class_list().contains(DARK_CLASS));

    document::apply(DocumentEffect::Theme(Theme::Dark));
    assert!(root().class_list().contains(DARK_CLASS));
}

#[wasm_bindgen_test]
fn font_size_sets_data_attribute() {
    document::apply(DocumentEffect::FontSize(FontSize::Lg));
    assert_eq!(root().get_attribute(FONT_SIZE_ATTR).as_deref(), Some("lg"));
}

#[wasm_bindgen_test]
fn direction_effect_is_applied_verbatim() {
    document::apply(DocumentEffect::Direction(TextDirection::Rtl));
    assert_eq!(root().get_attribute("dir").as_deref(), Some("rtl"));
    document::apply(DocumentEffect::Direction(TextDirection::Ltr));
}

#[wasm_bindgen_test]
fn detection_does_not_panic() {
    let platform = Platform::detect();
    // Headless browsers differ; detection must simply resolve.
    let _ = platform.speech.is_available();
    assert!(scroll_offset() >= 0.0);
}

#[wasm_bindgen_test]
fn scroll_listener_is_released_with_its_owner() {
    let reports = Rc::new(Cell::new(0));
    let owner = Owner::new();
    owner.with(|| {
        let reports = Rc::clone(&reports);
        scroll::track_scroll(move |_| reports.set(reports.get() + 1));
    });

    // The current offset is reported on subscription.
    assert_eq!(reports.get(), 1);
    fire_scroll();
    assert_eq!(reports.get(), 2);

    owner.cleanup();
    fire_scroll();
    fire_scroll();
    assert_eq!(reports.get(), 2);
}

#[wasm_bindgen_test]
async fn unmatched_query_shows_no_results() {
    let parent = container();
    let slot = Rc::new(Cell::new(None));
    let _mounted = mount_to(parent.clone(), {
        let slot = Rc::clone(&slot);
        move || {
            slot.set(Some(ViewController::provide(Config::default(), Platform::default())));
            view! { <NoResults /> }
        }
    });
    let controller = slot.get().unwrap();
    assert!(!has(&parent, ".storymaster-no-results"));

    controller.dispatch(Action::SetSearchQuery("confidence".into()));
    settle().await;
    assert!(has(&parent, ".storymaster-no-results"));
    assert!(parent.text_content().unwrap().contains("confidence"));

    controller.dispatch(Action::ClearSearch);
    settle().await;
    assert!(!has(&parent, ".storymaster-no-results"));
}

#[wasm_bindgen_test]
async fn scroll_to_top_appears_past_threshold() {
    let parent = container();
    let slot = Rc::new(Cell::new(None));
    let _mounted = mount_to(parent.clone(), {
        let slot = Rc::clone(&slot);
        move || {
            slot.set(Some(ViewController::provide(Config::default(), Platform::default())));
            view! { <ScrollToTop /> }
        }
    });
    let controller = slot.get().unwrap();
    assert!(!has(&parent, ".storymaster-scroll-top"));

    controller.dispatch(Action::Scrolled(400.0));
    settle().await;
    assert!(!has(&parent, ".storymaster-scroll-top"));

    controller.dispatch(Action::Scrolled(401.0));
    settle().await;
    assert!(has(&parent, ".storymaster-scroll-top"));

    controller.dispatch(Action::Scrolled(0.0));
    settle().await;
    assert!(!has(&parent, ".storymaster-scroll-top"));
}

#[wasm_bindgen_test]
fn download_leaves_no_anchor_behind() {
    let items = assemble(Language::En.translation());
    let file = ExportFile::build(&items, Language::En, &ExportConfig::default()).unwrap();
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    let before = body.child_element_count();

    download(&file).unwrap();
    assert_eq!(body.child_element_count(), before);
    assert!(body.query_selector("a[download]").unwrap().is_none());
}

#[wasm_bindgen_test]
fn ctrl_k_focuses_search_input() {
    let parent = container();
    let _mounted = mount_to(parent.clone(), || {
        let input_ref = NodeRef::<leptos::html::Input>::new();
        view! {
          <input node_ref=input_ref class="shortcut-target" />
          <SearchShortcut input_ref=input_ref />
        }
    });

    let init = web_sys::KeyboardEventInit::new();
    init.set_key("k");
    init.set_ctrl_key(true);
    init.set_cancelable(true);
    let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    let active = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .active_element()
        .unwrap();
    assert_eq!(active.class_name(), "shortcut-target");
}
