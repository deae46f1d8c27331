//! Export of the visible content as a downloadable JSON document.

use crate::{
    config::ExportConfig,
    content::ContentItem,
    error::{CoreError, Result},
    language::Language,
};

/// MIME type of the exported document.
pub const EXPORT_MIME: &str = "application/json";

/// A file ready to hand to the browser's download mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: String,
    pub mime: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Serialize `items` into a file named after the active language.
    pub fn build(items: &[ContentItem], language: Language, config: &ExportConfig) -> Result<Self> {
        let contents = serde_json::to_string_pretty(items)?;
        Ok(Self {
            name: file_name(language, config),
            mime: EXPORT_MIME,
            contents,
        })
    }
}

/// Deterministic export file name, e.g. `storymaster-export-en.json`.
pub fn file_name(language: Language, config: &ExportConfig) -> String {
    format!("{}-{}.{}", config.file_prefix, language.code(), config.extension)
}

/// Read an exported document back into content items.
pub fn parse_export(contents: &str) -> Result<Vec<ContentItem>> {
    if contents.trim().is_empty() {
        return Err(CoreError::export("export document is empty"));
    }
    Ok(serde_json::from_str(contents)?)
}
