use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::errors::{AppError, IntakeError};
use crate::models::{ReservationRecord, SkillPayload};
use crate::services::intake::{extract_reservation, offset_from_hours};
use crate::services::reply::{fallback_reply, success_reply};
use crate::services::reservation_id::new_reservation_id;
use crate::state::AppState;

/// Skill webhook for group-viewing reservations. Only POST is accepted;
/// every other failure still answers 200 with the fallback template.
pub async fn reservation_webhook(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        tracing::warn!(%method, "rejected non-POST reservation request");
        return AppError::MethodNotAllowed.into_response();
    }

    match intake(&state, &body).await {
        Ok(record) => {
            let reservation_id = new_reservation_id();
            tracing::info!(
                reservation_id = %reservation_id,
                people = %record.people_count,
                date = %record.preferred_date,
                time = %record.preferred_time,
                "reservation received"
            );
            Json(success_reply(&record, &reservation_id)).into_response()
        }
        Err(e) => {
            match &e {
                IntakeError::MalformedBody(err) => {
                    tracing::error!(kind = e.kind(), error = %err, body_len = body.len(), "could not parse skill payload");
                }
                IntakeError::MissingUtterance => {
                    tracing::error!(kind = e.kind(), "skill payload had neither contact slot nor utterance");
                }
                IntakeError::Sheets(err) => {
                    tracing::error!(kind = e.kind(), error = %err, "failed to store reservation");
                }
            }
            Json(fallback_reply()).into_response()
        }
    }
}

async fn intake(state: &AppState, body: &[u8]) -> Result<ReservationRecord, IntakeError> {
    let payload: SkillPayload = serde_json::from_slice(body)?;
    let record = extract_reservation(
        &payload,
        Utc::now(),
        offset_from_hours(state.config.utc_offset_hours),
    )?;

    state.sheets.append_row(&record.to_row()).await?;
    Ok(record)
}
