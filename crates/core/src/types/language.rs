//! Chat reply language.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages the chat assistant can reply in.
///
/// The reply language is selected per session and defaults to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Uz,
}

/// Error parsing a language code.
#[derive(Debug, Error)]
#[error("unsupported language code: {0}")]
pub struct LanguageParseError(pub String);

impl Language {
    /// ISO 639-1 code for the language.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Uz => "uz",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            "uz" => Ok(Self::Uz),
            other => Err(LanguageParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_parse_round_trip() {
        for lang in [Language::En, Language::Ru, Language::Uz] {
            let parsed: Language = lang.code().parse().expect("parse");
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Language::Uz).expect("serialize");
        assert_eq!(json, "\"uz\"");
    }
}
