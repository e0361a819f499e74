use axum::{
    extract::Path,
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::i18n::{Bundle, Language};
use crate::view::selector::{options, LanguageOption};

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub detected: Language,
    pub languages: Vec<LanguageOption>,
}

/// Runtime locale signal: the first `Accept-Language` tag, or English.
pub fn detect_language(headers: &HeaderMap) -> Language {
    let locale = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    Language::detect(locale)
}

/// GET /api/v1/i18n
///
/// Selector options, with the caller's detected locale pre-selected.
pub async fn handle_list_languages(headers: HeaderMap) -> Json<LanguagesResponse> {
    let detected = detect_language(&headers);
    Json(LanguagesResponse {
        detected,
        languages: options(detected),
    })
}

/// GET /api/v1/i18n/:lang
pub async fn handle_get_bundle(
    Path(code): Path<String>,
) -> Result<Json<&'static Bundle>, AppError> {
    let language: Language = code.parse()?;
    Ok(Json(language.bundle()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language_from_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(detect_language(&headers), Language::En);
        headers.insert(ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9,en;q=0.8".parse().unwrap());
        assert_eq!(detect_language(&headers), Language::Zh);
        headers.insert(ACCEPT_LANGUAGE, "ja-JP".parse().unwrap());
        assert_eq!(detect_language(&headers), Language::Ja);
    }
}
