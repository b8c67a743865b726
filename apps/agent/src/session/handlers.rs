//! Axum route handlers for session shutdown.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::interview::room_data::resolve_context;
use crate::models::transcript::{HistoryItem, Transcript};
use crate::session::pipeline::SessionOutcome;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    #[serde(default)]
    pub items: Vec<HistoryItem>,
    /// Context captured at session start. Fetched from the backend when absent.
    pub candidate_details: Option<String>,
    pub job_description: Option<String>,
}

/// POST /api/v1/rooms/:room_name/transcript
///
/// Called by the voice runtime on shutdown with the full turn history. Always
/// answers 200 with the session outcome; analysis and delivery failures are
/// reported in the body, not as HTTP errors.
pub async fn handle_post_transcript(
    State(state): State<AppState>,
    Path(room_name): Path<String>,
    Json(request): Json<TranscriptRequest>,
) -> Result<Json<SessionOutcome>, AppError> {
    if room_name.trim().is_empty() {
        return Err(AppError::Validation("room_name cannot be empty".to_string()));
    }

    let transcript = Transcript::new(request.items);

    let has_context = request.candidate_details.is_some() && request.job_description.is_some();
    // An empty session is never analyzed, so it skips the backend round trip.
    let context = if has_context || transcript.is_empty() {
        resolve_context(request.candidate_details, request.job_description)
    } else {
        let fetched = state.room_data.fetch(&room_name).await;
        resolve_context(
            request.candidate_details.or(Some(fetched.candidate_details)),
            request.job_description.or(Some(fetched.job_description)),
        )
    };

    let outcome = state
        .finalizer
        .finalize(&room_name, &transcript, &context)
        .await;
    Ok(Json(outcome))
}
