pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::i18n::handlers as i18n;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Localization
        .route("/api/v1/i18n", get(i18n::handle_list_languages))
        .route("/api/v1/i18n/:lang", get(i18n::handle_get_bundle))
        // Stateless analysis
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        // Sessions (root controller)
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/query", put(session::handle_set_query))
        .route(
            "/api/v1/sessions/:id/language",
            put(session::handle_set_language),
        )
        .route(
            "/api/v1/sessions/:id/language/next",
            post(session::handle_next_language),
        )
        .route("/api/v1/sessions/:id/submit", post(session::handle_submit))
        .route("/api/v1/sessions/:id/dismiss", post(session::handle_dismiss))
        .with_state(state)
}
