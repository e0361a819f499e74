use std::sync::Arc;

use crate::analysis::client::Classifier;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable verdict backend. Production: `GeminiClassifier`.
    pub classifier: Arc<dyn Classifier>,
    pub sessions: SessionStore,
}
