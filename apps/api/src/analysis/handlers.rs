//! Axum route handlers for the stateless Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::client::analyze;
use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::i18n::Language;
use crate::state::AppState;
use crate::view::result::{render_result, ResultView};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub phone_number: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
    pub view: ResultView,
}

/// POST /api/v1/analyze
///
/// One-shot analysis without a session. Failures of the external service
/// still return 200 with an UNKNOWN result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.phone_number.trim().is_empty() {
        return Err(AppError::Validation(
            "phoneNumber cannot be empty".to_string(),
        ));
    }

    let language = match request.language.as_deref() {
        Some(code) => code.parse::<Language>()?,
        None => Language::default(),
    };

    let result = analyze(state.classifier.as_ref(), &request.phone_number, language).await;
    let view = render_result(&result, language);

    Ok(Json(AnalyzeResponse { result, view }))
}
