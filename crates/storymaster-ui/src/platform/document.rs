//! Document-root attributes driven by view state.

use storymaster_core::DocumentEffect;

/// Class present on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Attribute carrying the font size preset (`sm`, `md`, `lg`).
pub const FONT_SIZE_ATTR: &str = "data-font-size";

/// Apply one effect to `<html>`.
pub fn apply(effect: DocumentEffect) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        log::warn!("no document element, dropping {effect:?}");
        return;
    };

    let result = match effect {
        DocumentEffect::Direction(direction) => root.set_attribute("dir", direction.as_str()),
        DocumentEffect::LanguageTag(language) => root.set_attribute("lang", language.code()),
        DocumentEffect::Theme(theme) => root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark())
            .map(|_| ()),
        DocumentEffect::FontSize(size) => root.set_attribute(FONT_SIZE_ATTR, size.as_str()),
    };

    if let Err(err) = result {
        log::warn!("failed to apply {effect:?}: {err:?}");
    }
}

pub fn apply_all(effects: impl IntoIterator<Item = DocumentEffect>) {
    effects.into_iter().for_each(apply);
}
