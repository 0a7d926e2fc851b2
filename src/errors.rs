use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::sheets::SheetsError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Failures while turning a skill callback into a stored reservation.
/// Every variant is answered with the same fallback reply.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("no contact number slot and no utterance to fall back on")]
    MissingUtterance,

    #[error("spreadsheet append failed: {0}")]
    Sheets(#[from] SheetsError),
}

impl IntakeError {
    pub fn kind(&self) -> &'static str {
        match self {
            IntakeError::MalformedBody(_) => "malformed_body",
            IntakeError::MissingUtterance => "missing_utterance",
            IntakeError::Sheets(_) => "persistence",
        }
    }
}
