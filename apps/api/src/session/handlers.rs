//! Axum route handlers for the Session API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::client::{analyze, Classifier};
use crate::errors::AppError;
use crate::i18n::handlers::detect_language;
use crate::i18n::Language;
use crate::session::controller::{ControllerError, DismissKind, Settlement, SubmitTicket};
use crate::session::store::{SessionSnapshot, SessionStore};
use crate::state::AppState;
use crate::view::selector;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetQueryRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct DismissRequest {
    pub kind: DismissKind,
}

impl From<ControllerError> for AppError {
    fn from(e: ControllerError) -> Self {
        match e {
            ControllerError::EmptyQuery => AppError::Validation(e.to_string()),
            ControllerError::Busy => AppError::Conflict(e.to_string()),
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// An explicit `language` wins; otherwise the locale heuristic picks one.
/// The body is optional, but a JSON body that does not parse is rejected.
pub async fn handle_create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => CreateSessionRequest::default(),
        Err(rejection) => return Err(AppError::Validation(rejection.body_text())),
    };
    let language = match request.language {
        Some(code) => code.parse::<Language>()?,
        None => detect_language(&headers),
    };

    let snapshot = state.sessions.create(language).await;
    info!("Session {} created ({language})", snapshot.id);
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state.sessions.snapshot(id).await.ok_or_else(|| not_found(id))?;
    Ok(Json(snapshot))
}

/// PUT /api/v1/sessions/:id/query
pub async fn handle_set_query(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetQueryRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let (outcome, snapshot) = state
        .sessions
        .update(id, |c| c.set_query(request.query))
        .await
        .ok_or_else(|| not_found(id))?;
    outcome?;
    Ok(Json(snapshot))
}

/// PUT /api/v1/sessions/:id/language
pub async fn handle_set_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetLanguageRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let language: Language = request.language.parse()?;
    let ((), snapshot) = state
        .sessions
        .update(id, |c| c.set_language(language))
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/language/next
pub async fn handle_next_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let ((), snapshot) = state
        .sessions
        .update(id, |c| c.set_language(selector::next(c.language())))
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/submit
///
/// Returns immediately in the `loading` phase. The analysis runs in a
/// background task and settles into the session when it completes.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let (ticket, snapshot) = state
        .sessions
        .update(id, |c| c.begin_submit())
        .await
        .ok_or_else(|| not_found(id))?;
    let ticket = ticket?;

    info!(
        "Session {id}: analysis #{} started ({})",
        ticket.generation, ticket.language
    );
    tokio::spawn(run_submission(
        state.sessions.clone(),
        state.classifier.clone(),
        id,
        ticket,
    ));

    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

/// Performs the analysis for `ticket` and settles it into session `id`.
/// The store lock is not held while the classifier runs.
pub async fn run_submission(
    sessions: SessionStore,
    classifier: Arc<dyn Classifier>,
    id: Uuid,
    ticket: SubmitTicket,
) -> Option<Settlement> {
    let result = analyze(classifier.as_ref(), &ticket.query, ticket.language).await;

    let settlement = sessions
        .update(id, |c| c.settle(&ticket, result))
        .await
        .map(|(settlement, _)| settlement);

    match settlement {
        Some(Settlement::Applied) => {
            info!("Session {id}: analysis #{} settled", ticket.generation)
        }
        Some(Settlement::Stale) => debug!(
            "Session {id}: dropping stale analysis #{}",
            ticket.generation
        ),
        None => debug!("Session {id} is gone; discarding analysis"),
    }
    settlement
}

/// POST /api/v1/sessions/:id/dismiss
pub async fn handle_dismiss(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DismissRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let ((), snapshot) = state
        .sessions
        .update(id, |c| c.dismiss(request.kind))
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::client::tests::{city_hall, StubClassifier};
    use crate::analysis::models::SafetyStatus;
    use crate::session::controller::Phase;

    #[tokio::test]
    async fn test_run_submission_settles_current_ticket() {
        let store = SessionStore::default();
        let classifier: Arc<dyn Classifier> = Arc::new(StubClassifier::new(city_hall));
        let id = store.create(Language::En).await.id;
        store.update(id, |c| c.set_query("090-1234-5678")).await;
        let (ticket, _) = store.update(id, |c| c.begin_submit()).await.unwrap();

        let settlement = run_submission(store.clone(), classifier, id, ticket.unwrap()).await;
        assert_eq!(settlement, Some(Settlement::Applied));

        let snap = store.snapshot(id).await.unwrap();
        assert_eq!(snap.phase, Phase::Settled);
        assert_eq!(snap.result.unwrap().status, SafetyStatus::Safe);
    }

    #[tokio::test]
    async fn test_run_submission_after_dismiss_is_stale() {
        let store = SessionStore::default();
        let classifier: Arc<dyn Classifier> = Arc::new(StubClassifier::new(city_hall));
        let id = store.create(Language::En).await.id;
        store.update(id, |c| c.set_query("110")).await;
        let (ticket, _) = store.update(id, |c| c.begin_submit()).await.unwrap();
        store.update(id, |c| c.dismiss(DismissKind::Reset)).await;

        let settlement = run_submission(store.clone(), classifier, id, ticket.unwrap()).await;
        assert_eq!(settlement, Some(Settlement::Stale));
        assert_eq!(store.snapshot(id).await.unwrap().phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_run_submission_for_deleted_session_is_discarded() {
        let store = SessionStore::default();
        let classifier: Arc<dyn Classifier> = Arc::new(StubClassifier::new(city_hall));
        let id = store.create(Language::En).await.id;
        store.update(id, |c| c.set_query("110")).await;
        let (ticket, _) = store.update(id, |c| c.begin_submit()).await.unwrap();
        store.remove(id).await;

        assert_eq!(
            run_submission(store, classifier, id, ticket.unwrap()).await,
            None
        );
    }
}
