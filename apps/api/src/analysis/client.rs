//! Analysis client: turns a phone number into a normalized `AnalysisResult`.
//!
//! The verdict itself comes from a pluggable `Classifier`. `GeminiClassifier`
//! is the production backend; tests substitute stubs.
//!
//! `analyze` never fails: every classifier error degrades to the UNKNOWN
//! fallback with the caller's phone number preserved.

use async_trait::async_trait;
use tracing::{error, info};

use crate::analysis::models::{AnalysisResult, Verdict};
use crate::analysis::prompts::{build_classify_prompt, verdict_schema};
use crate::i18n::Language;
use crate::llm_client::{LlmClient, LlmError};

/// Narrow seam around the external classification capability.
///
/// Carried in `AppState` as `Arc<dyn Classifier>`.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, phone_number: &str, language: Language) -> Result<Verdict, LlmError>;
}

/// Classifier backed by a schema-constrained Gemini call.
pub struct GeminiClassifier(pub LlmClient);

#[async_trait]
impl Classifier for GeminiClassifier {
    async fn classify(&self, phone_number: &str, language: Language) -> Result<Verdict, LlmError> {
        let prompt = build_classify_prompt(phone_number, language);
        self.0.call_json::<Verdict>(&prompt, &verdict_schema()).await
    }
}

/// Classifies `phone_number` and normalizes the outcome.
pub async fn analyze(
    classifier: &dyn Classifier,
    phone_number: &str,
    language: Language,
) -> AnalysisResult {
    match classifier.classify(phone_number, language).await {
        Ok(verdict) => {
            info!(
                "Analysis verdict {} for {phone_number} ({language})",
                verdict.status.as_str()
            );
            AnalysisResult::from_verdict(phone_number, verdict)
        }
        Err(e) => {
            error!("Phone number analysis failed for {phone_number}: {e}");
            AnalysisResult::unavailable(phone_number)
        }
    }
}
