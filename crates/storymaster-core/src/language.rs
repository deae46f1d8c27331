//! Supported page languages.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::CoreError,
    translations::{self, TranslationRecord},
};

/// A language the page can be rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
    Zh,
    Hi,
    De,
    Es,
    Fr,
}

/// Reading direction of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value of the HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::He,
        Language::Zh,
        Language::Hi,
        Language::De,
        Language::Es,
        Language::Fr,
    ];

    /// Short language code, also used as the document `lang` tag.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::He => "he",
            Self::Zh => "zh",
            Self::Hi => "hi",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Name of the language written in itself, for the language selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::He => "עברית",
            Self::Zh => "中文",
            Self::Hi => "हिन्दी",
            Self::De => "Deutsch",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }

    /// Reading direction of the language's script.
    pub fn direction(self) -> TextDirection {
        match self {
            Self::He => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Locale tag handed to the speech synthesizer.
    pub fn voice_locale(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::He => "he-IL",
            Self::Zh => "zh-CN",
            Self::Hi => "hi-IN",
            Self::De => "de-DE",
            Self::Es => "es-ES",
            Self::Fr => "fr-FR",
        }
    }

    /// The complete string table for this language.
    pub fn translation(self) -> &'static TranslationRecord {
        match self {
            Self::En => &translations::EN,
            Self::He => &translations::HE,
            Self::Zh => &translations::ZH,
            Self::Hi => &translations::HI,
            Self::De => &translations::DE,
            Self::Es => &translations::ES,
            Self::Fr => &translations::FR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownLanguage(s.to_string()))
    }
}
