//! Root controller. Owns the query text, loading flag, last result and
//! active language for one user.
//!
//! Lifecycle: `idle` → `loading` (submit) → `settled` (result applied) → `idle`
//! (dismiss, or clearing the query). At most one analysis is in flight.
//!
//! Every submission is stamped with a generation number. A settlement only
//! applies if its generation is still the latest one, so a result arriving
//! after the user dismissed or resubmitted is dropped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::models::AnalysisResult;
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Settled,
}

/// How the user left the result sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissKind {
    /// Close the sheet, keep the query text.
    Close,
    /// Return home with an empty query.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("an analysis is already in progress")]
    Busy,
}

/// Everything the in-flight analysis needs, captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub query: String,
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Stale,
}

#[derive(Debug, Clone)]
pub struct Controller {
    query: String,
    language: Language,
    loading: bool,
    result: Option<AnalysisResult>,
    generation: u64,
}

impl Controller {
    pub fn new(language: Language) -> Self {
        Self {
            query: String::new(),
            language,
            loading: false,
            result: None,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.result.is_some() {
            Phase::Settled
        } else {
            Phase::Idle
        }
    }

    /// Replaces the query text. The input is locked while loading.
    /// Clearing the field discards any shown result.
    pub fn set_query(&mut self, text: impl Into<String>) -> Result<(), ControllerError> {
        if self.loading {
            return Err(ControllerError::Busy);
        }
        self.query = text.into();
        if self.query.trim().is_empty() {
            self.result = None;
        }
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Starts a submission. Rejected without any state change when the
    /// query is blank or another analysis is in flight.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, ControllerError> {
        if self.loading {
            return Err(ControllerError::Busy);
        }
        if self.query.trim().is_empty() {
            return Err(ControllerError::EmptyQuery);
        }

        self.generation += 1;
        self.loading = true;
        self.result = None;

        Ok(SubmitTicket {
            generation: self.generation,
            query: self.query.clone(),
            language: self.language,
        })
    }

    /// Applies the outcome of `ticket`'s analysis if it is still current.
    pub fn settle(&mut self, ticket: &SubmitTicket, result: AnalysisResult) -> Settlement {
        if ticket.generation != self.generation || !self.loading {
            return Settlement::Stale;
        }
        self.loading = false;
        self.result = Some(result);
        Settlement::Applied
    }

    /// Leaves the result sheet. Also abandons an in-flight analysis.
    pub fn dismiss(&mut self, kind: DismissKind) {
        if self.loading {
            self.generation += 1;
            self.loading = false;
        }
        self.result = None;
        if kind == DismissKind::Reset {
            self.query.clear();
        }
    }
}
