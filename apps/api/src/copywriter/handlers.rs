//! Axum route handlers for the copy session API.
//!
//! Submission is asynchronous: submit/retry move the session to LOADING,
//! spawn the generation call, and return immediately. Clients poll
//! `GET /api/v1/sessions/:id` for the outcome.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::copywriter::copy::{compose_share_text, GeneratedCopy, SHARE_TITLE};
use crate::copywriter::draft::{DraftField, OutputFormat, ProductDraft};
use crate::copywriter::generator::{generate_copy, user_facing_message};
use crate::copywriter::session::{AppStatus, CopySession, SharedSession};
use crate::copywriter::tone::Tone;
use crate::errors::AppError;
use crate::state::AppState;
use crate::usage::UsageRecord;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Snapshot of a session as returned by every session endpoint.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub status: AppStatus,
    pub draft: ProductDraft,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GeneratedCopy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionView {
    fn of(id: Uuid, session: &CopySession) -> Self {
        Self {
            id,
            status: session.status(),
            draft: session.draft.clone(),
            result: session.result().cloned(),
            error: session.error().map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    pub field: DraftField,
    pub value: String,
}

/// Payload for native share surfaces: a title plus the composed text block.
#[derive(Debug, Serialize)]
pub struct SharePayload {
    pub title: &'static str,
    pub text: String,
}

/// The fixed form options, so clients never hardcode the preset lists.
#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    pub tones: Vec<&'static str>,
    pub formats: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/presets
pub async fn handle_presets() -> Json<PresetsResponse> {
    Json(PresetsResponse {
        tones: Tone::ALL.iter().map(|t| t.label()).collect(),
        formats: OutputFormat::ALL.iter().map(|f| f.as_str()).collect(),
    })
}

/// POST /api/v1/sessions
///
/// Creates a session with a fresh default draft in IDLE.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let (id, session) = state.sessions.create().await;
    let view = SessionView::of(id, &*session.lock().await);
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = lookup(&state, &id).await?;
    let view = SessionView::of(id, &*session.lock().await);
    Ok(Json(view))
}

/// PATCH /api/v1/sessions/:id/draft
///
/// Replaces a single draft attribute, preserving all others.
pub async fn handle_update_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDraftRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = lookup(&state, &id).await?;
    let mut locked = session.lock().await;

    locked
        .draft
        .set_field(request.field, &request.value)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(SessionView::of(id, &locked)))
}

/// POST /api/v1/sessions/:id/submit
///
/// Validates the draft, moves the session to LOADING, and spawns the
/// generation call. 409 while a request is already in flight.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let session = lookup(&state, &id).await?;

    let view = {
        let mut locked = session.lock().await;
        let draft = locked.begin_submit()?;
        spawn_generation(state.clone(), session.clone(), draft);
        SessionView::of(id, &locked)
    };

    Ok((StatusCode::ACCEPTED, Json(view)))
}

/// POST /api/v1/sessions/:id/retry
///
/// Re-issues the failed generation with the stored draft. Only valid from
/// ERROR — the user never re-enters fields to retry.
pub async fn handle_retry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let session = lookup(&state, &id).await?;

    let view = {
        let mut locked = session.lock().await;
        let draft = locked.begin_retry()?;
        spawn_generation(state.clone(), session.clone(), draft);
        SessionView::of(id, &locked)
    };

    Ok((StatusCode::ACCEPTED, Json(view)))
}

/// POST /api/v1/sessions/:id/reset
///
/// Back to IDLE with a fresh default draft ("write another").
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = lookup(&state, &id).await?;
    let mut locked = session.lock().await;

    locked.reset()?;

    Ok(Json(SessionView::of(id, &locked)))
}

/// GET /api/v1/sessions/:id/share
///
/// The composed share payload for the generated copy. 409 until SUCCESS.
pub async fn handle_share(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SharePayload>, AppError> {
    let session = lookup(&state, &id).await?;
    let locked = session.lock().await;

    let copy = locked
        .result()
        .ok_or_else(|| AppError::Conflict("no generated copy to share yet".to_string()))?;

    Ok(Json(SharePayload {
        title: SHARE_TITLE,
        text: compose_share_text(copy),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Background generation
// ────────────────────────────────────────────────────────────────────────────

async fn lookup(state: &AppState, id: &Uuid) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// Runs the generation call off the request path and records the outcome on
/// the session. On success the usage sink is invoked fire-and-forget: its
/// failure is logged and swallowed, never surfaced to the session.
fn spawn_generation(state: AppState, session: SharedSession, draft: ProductDraft) {
    tokio::spawn(async move {
        match generate_copy(&state.llm, &draft).await {
            Ok(copy) => {
                let record = UsageRecord::from_draft(&draft, copy.headline.clone());
                session.lock().await.complete_success(copy);

                let usage = state.usage.clone();
                tokio::spawn(async move {
                    if let Err(e) = usage.record(&record).await {
                        warn!("Usage logging failed (ignored): {e}");
                    }
                });
            }
            Err(e) => {
                error!("Copy generation failed: {e}");
                session
                    .lock()
                    .await
                    .complete_failure(user_facing_message(&e));
            }
        }
    });
}
