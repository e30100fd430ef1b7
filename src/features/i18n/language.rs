use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::catalog::Catalog;

/// Languages with a bundled translation table
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
    Ta,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Fr, Language::Es, Language::Ta];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::Ta => "ta",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Es => "Español",
            Language::Ta => "தமிழ்",
        }
    }

    /// Match a language tag such as `ta`, `ta-IN` or `FR_fr`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Self::ALL.into_iter().find(|l| l.code() == primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("Unsupported language '{}'", s))
    }
}

/// Language in effect for one request
///
/// Resolved from the `lang` query parameter, then `Accept-Language`, then English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageContext {
    language: Language,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn resolve(query_lang: Option<&str>, accept_language: Option<&str>) -> Self {
        let language = query_lang
            .and_then(Language::from_tag)
            .or_else(|| accept_language.and_then(preferred_language))
            .unwrap_or_default();

        Self::new(language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate a key, falling back to English and then to the key itself
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        Catalog::lookup(self.language, key)
            .or_else(|| Catalog::lookup(Language::En, key))
            .unwrap_or(key)
    }
}

/// Highest-weighted supported language in an `Accept-Language` header
fn preferred_language(header: &str) -> Option<Language> {
    let mut best: Option<(Language, f32)> = None;

    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let Some(language) = parts.next().and_then(Language::from_tag) else {
            continue;
        };
        let weight = parts
            .find_map(|p| p.trim().strip_prefix("q="))
            .and_then(|q| q.parse::<f32>().ok())
            .unwrap_or(1.0);

        if weight > 0.0 && best.is_none_or(|(_, w)| weight > w) {
            best = Some((language, weight));
        }
    }

    best.map(|(language, _)| language)
}
