use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::copywriter::session::SessionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Draft(e) => AppError::Validation(e.to_string()),
            SessionError::GenerationInFlight
            | SessionError::AlreadyGenerated
            | SessionError::NothingToRetry
            | SessionError::ResetWhileLoading => AppError::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_in_flight_maps_to_conflict() {
        let err: AppError = SessionError::GenerationInFlight.into();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_draft_error_maps_to_validation() {
        use crate::copywriter::draft::DraftError;

        let err: AppError = SessionError::Draft(DraftError::MissingField("region")).into();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("region")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
