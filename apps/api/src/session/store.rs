//! In-memory session store: one root controller per front-end tab.
//! Nothing here outlives the process.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::info;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;
use crate::i18n::Language;
use crate::session::controller::{Controller, Phase};
use crate::view::home::{render_home, HomeView};
use crate::view::result::{render_result, ResultView};
use crate::view::selector::{options, LanguageOption};

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub controller: Controller,
}

/// Everything the front-end needs to draw one session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub phase: Phase,
    /// Number of the most recent submission; 0 before the first one.
    pub generation: u64,
    pub language: Language,
    pub query: String,
    pub home: HomeView,
    pub languages: Vec<LanguageOption>,
    pub result: Option<AnalysisResult>,
    pub result_view: Option<ResultView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    fn new(language: Language) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            controller: Controller::new(language),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let c = &self.controller;
        let language = c.language();
        SessionSnapshot {
            id: self.id,
            phase: c.phase(),
            generation: c.generation(),
            language,
            query: c.query().to_string(),
            home: render_home(c.query(), c.is_loading(), language),
            languages: options(language),
            result: c.result().cloned(),
            result_view: c.result().map(|r| render_result(r, language)),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub async fn create(&self, language: Language) -> SessionSnapshot {
        let session = Session::new(language);
        let snapshot = session.snapshot();
        self.inner.write().await.insert(session.id, session);
        snapshot
    }

    pub async fn snapshot(&self, id: Uuid) -> Option<SessionSnapshot> {
        self.inner.read().await.get(&id).map(Session::snapshot)
    }

    /// Runs `f` against the session's controller under the write lock and
    /// returns its output with a fresh snapshot. `None` if the id is unknown.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Controller) -> T,
    ) -> Option<(T, SessionSnapshot)> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id)?;
        let output = f(&mut session.controller);
        session.updated_at = Utc::now();
        Some((output, session.snapshot()))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Drops sessions untouched for longer than `max_idle`. A session with an
    /// analysis in flight is kept until it settles. Returns the number removed.
    pub async fn prune_idle(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.controller.is_loading() || s.updated_at >= cutoff);
        before - sessions.len()
    }
}

/// Background task pruning idle sessions every `period`.
pub fn spawn_idle_sweeper(
    store: SessionStore,
    max_idle: Duration,
    period: std::time::Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = store.prune_idle(max_idle).await;
            if removed > 0 {
                info!("Evicted {removed} idle session(s)");
            }
        }
    })
}
