//! Displayable content items assembled from a translation record.

use serde::{Deserialize, Serialize};

use crate::translations::{EXAMPLE_COUNT, Entry, TIP_COUNT, TranslationRecord};

/// Icons shown next to each tip, in record order.
pub const TIP_ICONS: [&str; TIP_COUNT] = ["🎣", "🎭", "🧭", "⚡", "🎯"];

/// Icons shown next to each worked example, in record order.
pub const EXAMPLE_ICONS: [&str; EXAMPLE_COUNT] = ["🔑", "🏔️"];

/// Section a content item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Tip,
    Example,
}

/// One displayable unit of static content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Tip or worked example.
    pub kind: ContentKind,

    /// Item title.
    pub title: String,

    /// Item body.
    pub description: String,

    /// Decorative glyph.
    pub icon: String,
}

impl ContentItem {
    fn from_entry(kind: ContentKind, entry: &Entry, icon: &str) -> Self {
        Self {
            kind,
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Text read aloud or shared for this item.
    pub fn spoken_text(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }

    /// Whether this item is a tip.
    pub fn is_tip(&self) -> bool {
        self.kind == ContentKind::Tip
    }
}

/// Build the ordered content list for one language: tips first, then examples.
pub fn assemble(record: &TranslationRecord) -> Vec<ContentItem> {
    let tips = record
        .tips
        .iter()
        .zip(TIP_ICONS)
        .map(|(entry, icon)| ContentItem::from_entry(ContentKind::Tip, entry, icon));

    let examples = record
        .examples
        .iter()
        .zip(EXAMPLE_ICONS)
        .map(|(entry, icon)| ContentItem::from_entry(ContentKind::Example, entry, icon));

    tips.chain(examples).collect()
}

/// Items of one kind, keeping their order.
pub fn of_kind(items: &[ContentItem], kind: ContentKind) -> Vec<ContentItem> {
    items.iter().filter(|item| item.kind == kind).cloned().collect()
}
