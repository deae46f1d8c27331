use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use storymaster_core::Config;
use storymaster_ui::{
    CtaSection, ExamplesList, Footer, Hero, NavBar, NoResults, NoticeToast, Platform,
    ScrollToTop, SearchPanel, TipsGrid, ViewController, use_controller,
};

const EMBEDDED_CONFIG: &str = include_str!("../storymaster.toml");

/// Load the embedded configuration, falling back to defaults.
pub fn load_config() -> Config {
    Config::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        log::error!("invalid storymaster.toml, using defaults: {err}");
        Config::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let controller = ViewController::provide(load_config(), Platform::detect());
    let t = controller.translation();

    view! {
      // sets the document title
      <Title text=move || format!("{} | {}", t.get().title, t.get().subtitle) />
      <Meta name="description" content=move || t.get().hero_desc />

      <Router>
        <Routes fallback=|| "Page not found.".into_view()>
          <Route path=StaticSegment("") view=LandingPage />
        </Routes>
      </Router>
    }
}

/// Renders the landing page.
#[component]
fn LandingPage() -> impl IntoView {
    let controller = use_controller();
    controller.track_scroll();

    view! {
      <NavBar />
      <main class="storymaster-main">
        <Hero />
        <SearchPanel />
        <NoResults />
        <TipsGrid />
        <ExamplesList />
        <CtaSection />
      </main>
      <Footer />
      <ScrollToTop />
      <NoticeToast />
    }
}

#[cfg(test)]
mod tests {
    use storymaster_core::Language;

    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = Config::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.site.default_language, Language::En);
        assert_eq!(config.view.scroll_threshold, 400.0);
        assert_eq!(config.export.file_prefix, "storymaster-export");
    }
}
