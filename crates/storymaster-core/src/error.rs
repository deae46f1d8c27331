//! Error types for the StoryMaster core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for StoryMaster.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A language code outside the supported set.
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    /// Export document could not be produced or read back.
    #[error("Export error: {0}")]
    Export(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new export error.
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export(message.into())
    }
}

/// Failure reported by a browser capability (speech, share, clipboard, download).
///
/// These never reach rendering: callers map them to a no-op, a fallback, or a
/// transient notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The capability is not exposed by this browser.
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// The user dismissed the platform dialog.
    #[error("action cancelled by user")]
    Cancelled,

    /// The platform refused or failed the request.
    #[error("platform rejected request: {0}")]
    Rejected(String),
}

impl PlatformError {
    /// Create a rejection error from any displayable reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("scroll threshold must be finite");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("scroll threshold"));
    }

    #[test]
    fn test_unknown_language_error() {
        let err = CoreError::UnknownLanguage("xx".to_string());
        assert_eq!(err.to_string(), "Unknown language code: xx");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_platform_error_display() {
        assert_eq!(PlatformError::Cancelled.to_string(), "action cancelled by user");
        assert_eq!(
            PlatformError::rejected("denied").to_string(),
            "platform rejected request: denied"
        );
        assert_eq!(
            PlatformError::Unavailable("speech synthesis").to_string(),
            "speech synthesis is not available"
        );
    }
}
