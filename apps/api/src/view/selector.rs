use serde::Serialize;

use crate::i18n::Language;

/// One entry of the language selector control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageOption {
    pub code: Language,
    pub label: &'static str,
    pub tag: &'static str,
    pub selected: bool,
}

/// Name of the language in its own script.
pub fn native_label(language: Language) -> &'static str {
    match language {
        Language::Ja => "日本語",
        Language::Zh => "中文",
        Language::En => "English",
    }
}

pub fn short_tag(language: Language) -> &'static str {
    match language {
        Language::Ja => "JP",
        Language::Zh => "CN",
        Language::En => "EN",
    }
}

pub fn options(current: Language) -> Vec<LanguageOption> {
    Language::ALL
        .into_iter()
        .map(|code| LanguageOption {
            code,
            label: native_label(code),
            tag: short_tag(code),
            selected: code == current,
        })
        .collect()
}

/// The language after `current` in selector order, wrapping around.
pub fn next(current: Language) -> Language {
    let idx = Language::ALL
        .iter()
        .position(|l| *l == current)
        .unwrap_or_default();
    Language::ALL[(idx + 1) % Language::ALL.len()]
}
