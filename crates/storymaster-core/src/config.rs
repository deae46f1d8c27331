//! Page configuration.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    language::Language,
    state::{FontSize, Theme},
};

/// Main configuration structure for the landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// View behaviour settings.
    #[serde(default)]
    pub view: ViewConfig,

    /// Export file settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Language selected on load.
    #[serde(default)]
    pub default_language: Language,

    /// Theme selected on load.
    #[serde(default)]
    pub default_theme: Theme,

    /// Font size selected on load.
    #[serde(default)]
    pub default_font_size: FontSize,
}

/// View configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Vertical scroll offset past which the scroll-to-top control appears.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// File name prefix, followed by `-<language code>`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// File extension without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_scroll_threshold() -> f64 {
    400.0
}

fn default_file_prefix() -> String {
    "storymaster-export".to_string()
}

fn default_extension() -> String {
    "json".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            default_theme: Theme::default(),
            default_font_size: FontSize::default(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.view.scroll_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CoreError::config(format!(
                "view.scroll_threshold must be a non-negative number, got {threshold}"
            )));
        }

        if self.export.file_prefix.trim().is_empty() {
            return Err(CoreError::config("export.file_prefix cannot be empty"));
        }

        if self.export.extension.trim().is_empty() || self.export.extension.starts_with('.') {
            return Err(CoreError::config(
                "export.extension must be non-empty and given without a leading dot",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.default_language, Language::En);
        assert_eq!(config.view.scroll_threshold, 400.0);
        assert_eq!(config.export.file_prefix, "storymaster-export");
        assert_eq!(config.export.extension, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
default_language = "he"
default_theme = "light"
default_font_size = "lg"

[view]
scroll_threshold = 250.0

[export]
file_prefix = "storymaster-results"
extension = "json"
"#;

        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.site.default_language, Language::He);
        assert_eq!(config.site.default_theme, Theme::Light);
        assert_eq!(config.site.default_font_size, FontSize::Lg);
        assert_eq!(config.view.scroll_threshold, 250.0);
        assert_eq!(config.export.file_prefix, "storymaster-results");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_language_rejected() {
        let toml = r#"
[site]
default_language = "xx"
"#;
        assert!(Config::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let toml = r#"
[view]
scroll_threshold = -1.0
"#;
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("scroll_threshold"));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let toml = r#"
[export]
file_prefix = "  "
"#;
        assert!(Config::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let toml = r#"
[export]
extension = ".json"
"#;
        assert!(Config::from_toml_str(toml).is_err());
    }
}
