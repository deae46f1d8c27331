//! View state and its transitions.
//!
//! `ViewState` is only ever replaced through [`ViewState::transition`], which
//! returns the next state together with the document-level effects the view
//! layer must apply.

use serde::{Deserialize, Serialize};

use crate::{
    config::{Config, ViewConfig},
    language::{Language, TextDirection},
};

/// Presentation mode applied at the document root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Text size preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Sm, FontSize::Md, FontSize::Lg];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Short button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sm => "A-",
            Self::Md => "A",
            Self::Lg => "A+",
        }
    }
}

/// Everything the page renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub language: Language,
    pub theme: Theme,
    pub font_size: FontSize,
    pub search_query: String,
    pub scroll_past_threshold: bool,
}

/// A user or environment event that changes the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLanguage(Language),
    SetTheme(Theme),
    ToggleTheme,
    SetFontSize(FontSize),
    SetSearchQuery(String),
    ClearSearch,
    /// Vertical scroll offset of the viewport.
    Scrolled(f64),
}

/// A change the view layer applies to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEffect {
    Direction(TextDirection),
    LanguageTag(Language),
    Theme(Theme),
    FontSize(FontSize),
}

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ViewState,
    pub effects: Vec<DocumentEffect>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ViewState {
    /// Initial state from configured defaults.
    pub fn new(config: &Config) -> Self {
        Self {
            language: config.site.default_language,
            theme: config.site.default_theme,
            font_size: config.site.default_font_size,
            search_query: String::new(),
            scroll_past_threshold: false,
        }
    }

    /// Compute the next state and its document effects.
    pub fn transition(&self, action: Action, view: &ViewConfig) -> Transition {
        let mut state = self.clone();
        let mut effects = Vec::new();

        match action {
            Action::SetLanguage(language) => {
                state.language = language;
                effects.extend(language_effects(language));
            }
            Action::SetTheme(theme) => {
                state.theme = theme;
                effects.push(DocumentEffect::Theme(theme));
            }
            Action::ToggleTheme => {
                state.theme = self.theme.toggled();
                effects.push(DocumentEffect::Theme(state.theme));
            }
            Action::SetFontSize(size) => {
                state.font_size = size;
                effects.push(DocumentEffect::FontSize(size));
            }
            Action::SetSearchQuery(query) => state.search_query = query,
            Action::ClearSearch => state.search_query.clear(),
            Action::Scrolled(offset) => {
                state.scroll_past_threshold = offset > view.scroll_threshold;
            }
        }

        Transition { state, effects }
    }

    /// Effects that bring a freshly loaded document in line with this state.
    pub fn document_effects(&self) -> Vec<DocumentEffect> {
        let mut effects: Vec<_> = language_effects(self.language).into();
        effects.push(DocumentEffect::Theme(self.theme));
        effects.push(DocumentEffect::FontSize(self.font_size));
        effects
    }
}

fn language_effects(language: Language) -> [DocumentEffect; 2] {
    [
        DocumentEffect::Direction(language.direction()),
        DocumentEffect::LanguageTag(language),
    ]
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn apply(state: &ViewState, action: Action) -> Transition {
        state.transition(action, &ViewConfig::default())
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert_eq!(state.language, Language::En);
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.font_size, FontSize::Md);
        assert!(state.search_query.is_empty());
        assert!(!state.scroll_past_threshold);
    }

    #[test]
    fn test_hebrew_sets_rtl_and_english_sets_ltr() {
        let he = apply(&ViewState::default(), Action::SetLanguage(Language::He));
        assert_eq!(he.state.language, Language::He);
        assert_eq!(
            he.effects,
            vec![
                DocumentEffect::Direction(TextDirection::Rtl),
                DocumentEffect::LanguageTag(Language::He),
            ]
        );

        let en = apply(&he.state, Action::SetLanguage(Language::En));
        assert_eq!(
            en.effects,
            vec![
                DocumentEffect::Direction(TextDirection::Ltr),
                DocumentEffect::LanguageTag(Language::En),
            ]
        );
    }

    #[test]
    fn test_toggle_theme_twice_restores_state() {
        let start = ViewState::default();
        let once = apply(&start, Action::ToggleTheme);
        assert_eq!(once.state.theme, Theme::Light);
        assert_eq!(once.effects, vec![DocumentEffect::Theme(Theme::Light)]);

        let twice = apply(&once.state, Action::ToggleTheme);
        assert_eq!(twice.state, start);
        assert_eq!(twice.effects, vec![DocumentEffect::Theme(Theme::Dark)]);
    }

    #[test]
    fn test_font_size_effect() {
        let t = apply(&ViewState::default(), Action::SetFontSize(FontSize::Lg));
        assert_eq!(t.state.font_size, FontSize::Lg);
        assert_eq!(t.effects, vec![DocumentEffect::FontSize(FontSize::Lg)]);
    }

    #[test]
    fn test_search_query_has_no_document_effects() {
        let t = apply(&ViewState::default(), Action::SetSearchQuery("hook".into()));
        assert_eq!(t.state.search_query, "hook");
        assert!(t.effects.is_empty());

        let cleared = apply(&t.state, Action::ClearSearch);
        assert!(cleared.state.search_query.is_empty());
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        let state = ViewState::default();
        assert!(!apply(&state, Action::Scrolled(399.0)).state.scroll_past_threshold);
        assert!(!apply(&state, Action::Scrolled(400.0)).state.scroll_past_threshold);
        assert!(apply(&state, Action::Scrolled(400.5)).state.scroll_past_threshold);

        let past = apply(&state, Action::Scrolled(900.0)).state;
        assert!(!apply(&past, Action::Scrolled(0.0)).state.scroll_past_threshold);
    }

    #[test]
    fn test_custom_scroll_threshold() {
        let view = ViewConfig {
            scroll_threshold: 50.0,
        };
        let t = ViewState::default().transition(Action::Scrolled(60.0), &view);
        assert!(t.state.scroll_past_threshold);
    }

    #[test]
    fn test_transition_leaves_original_untouched() {
        let start = ViewState::default();
        let _ = apply(&start, Action::SetSearchQuery("tension".into()));
        assert!(start.search_query.is_empty());
    }

    #[test]
    fn test_initial_document_effects() {
        let mut config = Config::default();
        config.site.default_language = Language::He;
        config.site.default_theme = Theme::Light;
        let effects = ViewState::new(&config).document_effects();
        assert_eq!(
            effects,
            vec![
                DocumentEffect::Direction(TextDirection::Rtl),
                DocumentEffect::LanguageTag(Language::He),
                DocumentEffect::Theme(Theme::Light),
                DocumentEffect::FontSize(FontSize::Md),
            ]
        );
    }

    proptest! {
        /// Toggling the theme twice is the identity on any state.
        #[test]
        fn prop_double_toggle_is_identity(
            lang in prop::sample::select(Language::ALL.to_vec()),
            size in prop::sample::select(FontSize::ALL.to_vec()),
            dark in any::<bool>(),
            query in "[a-z ]{0,10}",
        ) {
            let start = ViewState {
                language: lang,
                theme: if dark { Theme::Dark } else { Theme::Light },
                font_size: size,
                search_query: query,
                scroll_past_threshold: false,
            };
            let once = apply(&start, Action::ToggleTheme).state;
            let twice = apply(&once, Action::ToggleTheme).state;
            prop_assert_ne!(&once.theme, &start.theme);
            prop_assert_eq!(twice, start);
        }
    }
}
