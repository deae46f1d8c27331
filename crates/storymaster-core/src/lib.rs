//! StoryMaster Core Library
//!
//! Platform-free model of the StoryMaster landing page: languages and their
//! string tables, the content list, search filtering, view-state transitions,
//! and the speech/share/export logic behind capability traits.

pub mod capability;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod language;
pub mod search;
pub mod share;
pub mod speech;
pub mod state;
pub mod translations;

pub use capability::Capability;
pub use config::Config;
pub use content::{ContentItem, ContentKind, assemble};
pub use error::{CoreError, PlatformError, Result};
pub use export::ExportFile;
pub use language::{Language, TextDirection};
pub use search::{SearchQuery, Segment, filter, highlight};
pub use share::{ClipboardService, ShareOutcome, ShareService};
pub use speech::{SpeechSynth, Utterance};
pub use state::{Action, DocumentEffect, FontSize, Theme, Transition, ViewState};
pub use translations::TranslationRecord;
