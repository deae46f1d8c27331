//! Free-text filtering over the content list.
//!
//! Queries are plain text: no wildcards, no escaping, no ranking. A query is
//! trimmed before use, and an empty result of trimming means "no filter".

use crate::content::ContentItem;

/// A parsed search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Raw query string as typed.
    pub raw: String,

    /// Trimmed, lowercased needle. `None` when the query filters nothing.
    folded: Option<String>,
}

impl SearchQuery {
    /// Parse a raw query string.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let folded = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());

        Self {
            raw: raw.to_string(),
            folded,
        }
    }

    /// Check if the query leaves the content unfiltered.
    pub fn is_empty(&self) -> bool {
        self.folded.is_none()
    }

    /// Whether an item's title or description contains the query.
    pub fn matches(&self, item: &ContentItem) -> bool {
        match &self.folded {
            None => true,
            Some(needle) => {
                item.title.to_lowercase().contains(needle.as_str())
                    || item.description.to_lowercase().contains(needle.as_str())
            }
        }
    }

    /// Apply the query to a content list, keeping the original order.
    pub fn apply(&self, items: &[ContentItem]) -> Vec<ContentItem> {
        if self.is_empty() {
            return items.to_vec();
        }
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

/// Filter content by a raw query string.
pub fn filter(items: &[ContentItem], query: &str) -> Vec<ContentItem> {
    SearchQuery::parse(query).apply(items)
}

/// A run of display text, marked when it matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Split text into matched and unmatched runs for highlighting.
///
/// Matching is case-insensitive and never splits a character. Concatenating
/// the segment texts always reproduces `text`.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let needle: Vec<char> = query.trim().chars().flat_map(char::to_lowercase).collect();
    if text.is_empty() {
        return Vec::new();
    }
    if needle.is_empty() {
        return vec![Segment::new(text, false)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        if let Some(end) = match_at(text, cursor, &needle) {
            if plain_start < cursor {
                segments.push(Segment::new(&text[plain_start..cursor], false));
            }
            segments.push(Segment::new(&text[cursor..end], true));
            cursor = end;
            plain_start = end;
        } else {
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::new(&text[plain_start..], false));
    }

    segments
}

/// End offset of a case-folded match of `needle` starting at `start`.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut expected = needle.iter();
    let mut remaining = needle.len();

    for (offset, ch) in text[start..].char_indices() {
        for folded in ch.to_lowercase() {
            match expected.next() {
                Some(&want) if want == folded => remaining -= 1,
                _ => return None,
            }
        }
        if remaining == 0 {
            return Some(start + offset + ch.len_utf8());
        }
    }

    None
}

/// Turn a plain-text drag-and-drop payload into a search query.
///
/// Whitespace runs (including newlines) collapse to single spaces; a blank
/// payload yields `None`.
pub fn query_from_drop(payload: &str) -> Option<String> {
    let query = payload.split_whitespace().collect::<Vec<_>>().join(" ");
    (!query.is_empty()).then_some(query)
}
