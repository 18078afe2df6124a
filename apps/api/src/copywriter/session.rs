//! Copy session — the state machine governing one generation call.
//!
//! A session owns the draft, the current `AppStatus`, and whichever of
//! result/error the status implies. All mutation goes through the transition
//! methods below; handlers never touch the fields directly. Exactly one
//! generation request may be in flight per session.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::copywriter::copy::GeneratedCopy;
use crate::copywriter::draft::{DraftError, ProductDraft};

/// The mutually exclusive session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a generation request is already in flight")]
    GenerationInFlight,

    #[error("copy already generated — reset the session to write another")]
    AlreadyGenerated,

    #[error("retry is only available after a failed generation")]
    NothingToRetry,

    #[error("cannot reset while a generation request is in flight")]
    ResetWhileLoading,

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// One copywriting session: draft + status + at most one of result/error.
#[derive(Debug, Default)]
pub struct CopySession {
    pub draft: ProductDraft,
    status: AppStatus,
    result: Option<GeneratedCopy>,
    error: Option<String>,
}

impl CopySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> AppStatus {
        self.status
    }

    /// The stored copy — present only in `Success`.
    pub fn result(&self) -> Option<&GeneratedCopy> {
        self.result.as_ref()
    }

    /// The stored failure message — present only in `Error`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Idle/Error → Loading. Validates the draft and hands back a snapshot
    /// for the caller to generate from.
    ///
    /// While Loading a second submit is refused without issuing a request.
    /// From Success the session must be reset first.
    pub fn begin_submit(&mut self) -> Result<ProductDraft, SessionError> {
        match self.status {
            AppStatus::Loading => return Err(SessionError::GenerationInFlight),
            AppStatus::Success => return Err(SessionError::AlreadyGenerated),
            AppStatus::Idle | AppStatus::Error => {}
        }

        self.draft.validate()?;

        self.status = AppStatus::Loading;
        self.error = None;
        Ok(self.draft.clone())
    }

    /// Error → Loading, re-using the stored draft. The draft was already
    /// valid when the failed request went out, so no re-entry of fields is
    /// required.
    pub fn begin_retry(&mut self) -> Result<ProductDraft, SessionError> {
        match self.status {
            AppStatus::Error => self.begin_submit(),
            AppStatus::Loading => Err(SessionError::GenerationInFlight),
            AppStatus::Idle | AppStatus::Success => Err(SessionError::NothingToRetry),
        }
    }

    /// Loading → Success, storing the parsed copy unmutated.
    /// A completion arriving in any other state is stale and ignored.
    pub fn complete_success(&mut self, copy: GeneratedCopy) {
        if self.status != AppStatus::Loading {
            return;
        }
        self.status = AppStatus::Success;
        self.result = Some(copy);
        self.error = None;
    }

    /// Loading → Error, storing the user-facing message.
    pub fn complete_failure(&mut self, message: String) {
        if self.status != AppStatus::Loading {
            return;
        }
        self.status = AppStatus::Error;
        self.result = None;
        self.error = Some(message);
    }

    /// Back to Idle with a fresh default draft, clearing any stored copy or
    /// error. There is no cancellation, so reset is refused while Loading.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.status == AppStatus::Loading {
            return Err(SessionError::ResetWhileLoading);
        }
        *self = Self::default();
        Ok(())
    }
}

pub type SharedSession = Arc<Mutex<CopySession>>;

/// In-memory session registry. Nothing persists across restarts.
///
/// The per-session mutex serializes user-driven transitions against the
/// background completion task.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session: SharedSession = Arc::new(Mutex::new(CopySession::new()));
        self.inner.write().await.insert(id, session.clone());
        (id, session)
    }

    pub async fn get(&self, id: &Uuid) -> Option<SharedSession> {
        self.inner.read().await.get(id).cloned()
    }
}
