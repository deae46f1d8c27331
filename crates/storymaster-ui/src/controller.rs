//! The view controller: sole owner of [`ViewState`].
//!
//! Components never write state directly. They call [`ViewController::dispatch`]
//! (or one of the fire-and-forget actions below), which runs the pure
//! transition from `storymaster-core` and applies the resulting document
//! effects.

use std::time::Duration;

use leptos::{prelude::*, task::spawn_local};
use storymaster_core::{
    Action, Config, ContentItem, ExportFile, Language, ShareOutcome, TranslationRecord, ViewState,
    assemble, filter, share::share_or_copy, speech,
};

use crate::platform::{Platform, document, download::download, scroll};

/// How long a notice stays on screen.
const NOTICE_DURATION: Duration = Duration::from_millis(2500);

/// A transient message shown after an asynchronous action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Copied,
    ShareFailed,
    ExportFailed,
}

impl NoticeKind {
    /// Localized message text.
    pub fn message(self, t: &TranslationRecord) -> &'static str {
        match self {
            Self::Copied => t.ui.copied,
            Self::ShareFailed => t.ui.share_failed,
            Self::ExportFailed => t.ui.export_failed,
        }
    }

    fn from_share(outcome: ShareOutcome) -> Option<Self> {
        match outcome {
            ShareOutcome::Copied => Some(Self::Copied),
            ShareOutcome::Failed => Some(Self::ShareFailed),
            ShareOutcome::Shared | ShareOutcome::Cancelled => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
}

/// Handle to the page state, shared with components through context.
#[derive(Clone, Copy)]
pub struct ViewController {
    state: RwSignal<ViewState>,
    config: StoredValue<Config>,
    platform: StoredValue<Platform, LocalStorage>,
    notice: RwSignal<Option<Notice>>,
    notice_seq: StoredValue<u64>,
    language: Memo<Language>,
    translation: Memo<&'static TranslationRecord>,
    query: Memo<String>,
    filtered: Memo<Vec<ContentItem>>,
}

impl ViewController {
    /// Create the controller and bring the document in line with the
    /// initial state.
    pub fn new(config: Config, platform: Platform) -> Self {
        let initial = ViewState::new(&config);
        document::apply_all(initial.document_effects());

        let state = RwSignal::new(initial);
        let language = Memo::new(move |_| state.with(|s| s.language));
        let translation = Memo::new(move |_| language.get().translation());
        let query = Memo::new(move |_| state.with(|s| s.search_query.clone()));
        let items = Memo::new(move |_| assemble(translation.get()));
        let filtered = Memo::new(move |_| query.with(|q| items.with(|all| filter(all, q))));

        Self {
            state,
            config: StoredValue::new(config),
            platform: StoredValue::new_local(platform),
            notice: RwSignal::new(None),
            notice_seq: StoredValue::new(0),
            language,
            translation,
            query,
            filtered,
        }
    }

    /// Create the controller and provide it to every descendant component.
    pub fn provide(config: Config, platform: Platform) -> Self {
        let controller = Self::new(config, platform);
        provide_context(controller);
        controller
    }

    /// Apply an action to the view state.
    pub fn dispatch(&self, action: Action) {
        if !matches!(action, Action::Scrolled(_)) {
            log::debug!("dispatch {action:?}");
        }

        let transition = self.config.with_value(|config| {
            self.state
                .with_untracked(|state| state.transition(action, &config.view))
        });

        document::apply_all(transition.effects);

        let changed = self.state.with_untracked(|state| *state != transition.state);
        if changed {
            self.state.set(transition.state);
        }
    }

    /// Subscribe to viewport scrolling for the lifetime of the calling scope.
    pub fn track_scroll(&self) {
        let controller = *self;
        scroll::track_scroll(move |offset| controller.dispatch(Action::Scrolled(offset)));
    }

    pub fn state(&self) -> Signal<ViewState> {
        self.state.into()
    }

    pub fn language(&self) -> Memo<Language> {
        self.language
    }

    pub fn translation(&self) -> Memo<&'static TranslationRecord> {
        self.translation
    }

    pub fn query(&self) -> Memo<String> {
        self.query
    }

    /// Content items matching the current query.
    pub fn filtered(&self) -> Memo<Vec<ContentItem>> {
        self.filtered
    }

    pub fn notice(&self) -> Signal<Option<Notice>> {
        self.notice.into()
    }

    /// Read `text` aloud in the active language, interrupting any playback.
    pub fn speak(&self, text: &str) {
        let language = self.language.get_untracked();
        self.platform
            .with_value(|platform| speech::speak(&platform.speech, text, language));
    }

    /// Share through the native sheet or copy to the clipboard.
    pub fn share(&self, title: String, text: String) {
        let (share, clipboard) = self
            .platform
            .with_value(|platform| (platform.share.clone(), platform.clipboard.clone()));
        let controller = *self;

        spawn_local(async move {
            let outcome = share_or_copy(&share, &clipboard, &title, &text).await;
            log::debug!("share outcome: {outcome:?}");
            if let Some(kind) = NoticeKind::from_share(outcome) {
                controller.notify(kind);
            }
        });
    }

    /// Download the currently visible items as JSON.
    pub fn export(&self) {
        let language = self.language.get_untracked();
        let built = self.filtered.with_untracked(|items| {
            self.config
                .with_value(|config| ExportFile::build(items, language, &config.export))
        });

        let result = match built {
            Ok(file) => download(&file).map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };

        if let Err(err) = result {
            log::warn!("export failed: {err}");
            self.notify(NoticeKind::ExportFailed);
        }
    }

    /// Show a notice that clears itself after a short delay.
    pub fn notify(&self, kind: NoticeKind) {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.notice.set(Some(Notice { id, kind }));

        let notice = self.notice;
        set_timeout(
            move || {
                if notice.with_untracked(|n| n.is_some_and(|n| n.id == id)) {
                    notice.set(None);
                }
            },
            NOTICE_DURATION,
        );
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

/// The controller provided by an ancestor.
pub fn use_controller() -> ViewController {
    expect_context::<ViewController>()
}
