//! Language definitions and detection
//!
//! The bot ships packs for a closed set of languages. Unknown codes fall back
//! to English everywhere, so downstream code never has to handle a missing
//! pack.

use serde::{Deserialize, Serialize};

/// Supported conversation languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Uk,
    De,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 4] = [Language::En, Language::Ru, Language::Uk, Language::De];

    /// Parse an ISO code; unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "ru" | "russian" => Language::Ru,
            "uk" | "ukrainian" => Language::Uk,
            "de" | "german" => Language::De,
            _ => Language::En,
        }
    }

    /// ISO 639-1 code
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uk => "uk",
            Language::De => "de",
        }
    }

    /// Detect the language of a message from its script and characteristic
    /// letters. Heuristic on purpose: the transport usually supplies a
    /// language code and this is only a fallback for free-text starts.
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();

        // Ukrainian has letters that Russian lacks
        if lower
            .chars()
            .any(|c| matches!(c, 'і' | 'ї' | 'є' | 'ґ'))
        {
            return Language::Uk;
        }
        if lower.chars().any(|c| ('а'..='я').contains(&c) || c == 'ё') {
            return Language::Ru;
        }
        if lower.chars().any(|c| matches!(c, 'ä' | 'ö' | 'ü' | 'ß')) {
            return Language::De;
        }
        // Common German function words for umlaut-free messages
        let german_hits = ["ich ", "nicht ", "und ", "der ", "das ", "haben "]
            .iter()
            .filter(|w| lower.contains(*w))
            .count();
        if german_hits >= 2 {
            return Language::De;
        }

        Language::En
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
