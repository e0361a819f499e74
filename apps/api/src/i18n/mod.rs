//! Localization: supported display languages and their static string bundles.
//!
//! Bundles are process-wide immutable data. Completeness (every language
//! defines every label) is enforced by the tests in this module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod handlers;
mod strings;

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
    Zh,
}

impl Language {
    /// Order used by the language selector.
    pub const ALL: [Language; 3] = [Language::Ja, Language::Zh, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
        }
    }

    /// Picks the initial language from a runtime locale string such as
    /// `ja-JP` or an `Accept-Language` header value.
    ///
    /// Only the first tag is considered: `zh*` → Chinese, `ja*` → Japanese,
    /// anything else (including an empty string) → English.
    pub fn detect(locale: &str) -> Language {
        let primary = locale
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        if primary.starts_with("zh") {
            Language::Zh
        } else if primary.starts_with("ja") {
            Language::Ja
        } else {
            Language::En
        }
    }

    pub fn bundle(self) -> &'static Bundle {
        match self {
            Language::En => &strings::EN,
            Language::Ja => &strings::JA,
            Language::Zh => &strings::ZH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code '{0}'")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ja" => Ok(Language::Ja),
            "zh" => Ok(Language::Zh),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Per-status headings and field labels used by the result sheet.
#[derive(Debug, Clone, Serialize)]
pub struct ResultLabels {
    pub safe: &'static str,
    pub scam: &'static str,
    pub unknown: &'static str,
    pub website: &'static str,
    pub entity: &'static str,
    pub reason: &'static str,
    pub close: &'static str,
}

/// Every display string for one language.
#[derive(Debug, Clone, Serialize)]
pub struct Bundle {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub search_button: &'static str,
    pub analyzing: &'static str,
    pub disclaimer: &'static str,
    pub result_labels: ResultLabels,
    pub unknown_message: &'static str,
}

impl Bundle {
    /// Returns the names of any labels that are empty.
    pub fn missing_labels(&self) -> Vec<&'static str> {
        let l = &self.result_labels;
        [
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("placeholder", self.placeholder),
            ("search_button", self.search_button),
            ("analyzing", self.analyzing),
            ("disclaimer", self.disclaimer),
            ("result_labels.safe", l.safe),
            ("result_labels.scam", l.scam),
            ("result_labels.unknown", l.unknown),
            ("result_labels.website", l.website),
            ("result_labels.entity", l.entity),
            ("result_labels.reason", l.reason),
            ("result_labels.close", l.close),
            ("unknown_message", self.unknown_message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
