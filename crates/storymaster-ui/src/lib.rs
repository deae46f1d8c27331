//! StoryMaster UI Components
//!
//! Leptos components and browser adapters for the StoryMaster landing page.
//!
//! # Components
//!
//! ## Page sections
//! - [`NavBar`] - Brand, language selector, font size and theme controls
//! - [`Hero`] - Headline with call to action, listen and share
//! - [`SearchPanel`] - Query input, result count, export, drop target
//! - [`TipsGrid`] / [`ExamplesList`] - Filtered content sections
//! - [`NoResults`] - Empty search state
//! - [`CtaSection`] / [`Footer`] - Static closing sections
//! - [`ScrollToTop`] - Floating control past the scroll threshold
//! - [`NoticeToast`] - Transient share/export messages
//!
//! ## State
//! - [`ViewController`] - Owns the view state; provided through context
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use storymaster_core::Config;
//! use storymaster_ui::{Platform, SearchPanel, TipsGrid, ViewController};
//!
//! #[component]
//! fn Page() -> impl IntoView {
//!     ViewController::provide(Config::default(), Platform::detect());
//!
//!     view! {
//!         <SearchPanel />
//!         <TipsGrid />
//!     }
//! }
//! ```

pub mod content;
pub mod controller;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod notice;
pub mod platform;
pub mod scroll_top;
pub mod search;

pub use content::{ContentCard, ExamplesList, NoResults, TipsGrid};
pub use controller::{Notice, NoticeKind, ViewController, use_controller};
pub use footer::{CtaSection, Footer};
pub use hero::Hero;
pub use navigation::{FontSizeControl, LanguageSelect, NavBar, ThemeToggle};
pub use notice::NoticeToast;
pub use platform::Platform;
pub use scroll_top::ScrollToTop;
pub use search::{SearchPanel, SearchShortcut};
