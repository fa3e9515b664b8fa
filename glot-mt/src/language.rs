//! Target language model
//!
//! The relay supports a fixed set of target languages. Backends consume them
//! in two forms: generative prompts use the English name verbatim, the
//! dictionary service uses the ISO 639-1 code. Keeping both on one enum makes
//! an accepted-but-unmapped language unrepresentable; an unknown name fails
//! closed at parse time.

use crate::error::TranslateError;
use std::str::FromStr;

/// Target languages supported by the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    French,
    Spanish,
    Japanese,
}

impl Language {
    /// Every supported language, in display order
    pub const ALL: [Language; 3] = [Language::French, Language::Spanish, Language::Japanese];

    /// English name, used verbatim in generative prompts
    pub fn name(&self) -> &'static str {
        match self {
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Japanese => "Japanese",
        }
    }

    /// ISO 639-1 code, used by the dictionary service
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Japanese => "ja",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = TranslateError;

    /// Accepts the English name or the ISO code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        for language in Language::ALL {
            if needle.eq_ignore_ascii_case(language.name())
                || needle.eq_ignore_ascii_case(language.code())
            {
                return Ok(language);
            }
        }
        let supported: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
        Err(TranslateError::Validation(format!(
            "Unknown target language \"{}\". Supported: {}",
            s,
            supported.join(", ")
        )))
    }
}
