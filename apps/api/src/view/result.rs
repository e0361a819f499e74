//! Result sheet: a pure rendering of an `AnalysisResult` in one language.
//!
//! Visibility rules:
//! - organization block: status is not UNKNOWN and an entity name is present
//! - website block: status is SAFE and a website is present
//! - details text: the localized caution message for UNKNOWN, otherwise the
//!   service description verbatim

use serde::Serialize;

use crate::analysis::models::{AnalysisResult, SafetyStatus};
use crate::i18n::Language;

const SECURE_SCHEME_PREFIX: &str = "https://";

/// Visual theme of the result sheet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Safe,
    Scam,
    Unknown,
}

impl Theme {
    pub fn for_status(status: SafetyStatus) -> Self {
        match status {
            SafetyStatus::Safe => Theme::Safe,
            SafetyStatus::Scam => Theme::Scam,
            SafetyStatus::Unknown => Theme::Unknown,
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            Theme::Safe => "emerald",
            Theme::Scam => "rose",
            Theme::Unknown => "slate",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Safe => "check-circle",
            Theme::Scam => "alert-triangle",
            Theme::Unknown => "help-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationBlock {
    pub label: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebsiteBlock {
    pub label: &'static str,
    pub display: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailsBlock {
    pub label: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub theme: Theme,
    pub accent: &'static str,
    pub icon: &'static str,
    pub headline: &'static str,
    pub phone_number: String,
    pub organization: Option<OrganizationBlock>,
    pub website: Option<WebsiteBlock>,
    pub details: DetailsBlock,
    pub close_label: &'static str,
}

pub fn render_result(result: &AnalysisResult, language: Language) -> ResultView {
    let bundle = language.bundle();
    let labels = &bundle.result_labels;
    let theme = Theme::for_status(result.status);

    let headline = match result.status {
        SafetyStatus::Safe => labels.safe,
        SafetyStatus::Scam => labels.scam,
        SafetyStatus::Unknown => labels.unknown,
    };

    let organization = match (result.status, present(&result.entity_name)) {
        (SafetyStatus::Unknown, _) | (_, None) => None,
        (_, Some(name)) => Some(OrganizationBlock {
            label: labels.entity,
            name: name.to_string(),
        }),
    };

    let website = match (result.status, present(&result.website)) {
        (SafetyStatus::Safe, Some(site)) => Some(WebsiteBlock {
            label: labels.website,
            display: site.to_string(),
            href: website_href(site),
        }),
        _ => None,
    };

    let details_text = match result.status {
        SafetyStatus::Unknown => bundle.unknown_message.to_string(),
        _ => result.description.clone(),
    };

    ResultView {
        theme,
        accent: theme.accent(),
        icon: theme.icon(),
        headline,
        phone_number: result.phone_number.clone(),
        organization,
        website,
        details: DetailsBlock {
            label: labels.reason,
            text: details_text,
        },
        close_label: labels.close,
    }
}

/// Link target for a stored website: kept as-is when it already carries a
/// scheme, otherwise prefixed with `https://`.
pub fn website_href(website: &str) -> String {
    let website = website.trim();
    if has_scheme(website) {
        website.to_string()
    } else {
        format!("{SECURE_SCHEME_PREFIX}{website}")
    }
}

fn has_scheme(value: &str) -> bool {
    match value.split_once("://") {
        Some((scheme, _)) => {
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
