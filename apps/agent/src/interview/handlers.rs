//! Axum route handlers for session start.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::interview::instructions::build_interviewer_instructions;
use crate::interview::prompts::OPENING_INSTRUCTION;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InstructionsResponse {
    pub room_name: String,
    pub instructions: String,
    pub opening_instruction: &'static str,
    pub candidate_details: String,
    pub job_description: String,
    pub used_fallback: bool,
}

/// GET /api/v1/rooms/:room_name/instructions
///
/// Called by the voice runtime when it joins a room. Fetches the room's
/// candidate and role text (with fallbacks) and renders the interviewer
/// instructions. A missing or malformed template fails the request.
pub async fn handle_get_instructions(
    State(state): State<AppState>,
    Path(room_name): Path<String>,
) -> Result<Json<InstructionsResponse>, AppError> {
    info!("Starting agent setup for room: {room_name}");

    let context = state.room_data.fetch(&room_name).await;
    let instructions = build_interviewer_instructions(
        state.prompt_template_path.as_path(),
        &context.candidate_details,
        &context.job_description,
    )?;

    Ok(Json(InstructionsResponse {
        room_name,
        instructions,
        opening_instruction: OPENING_INSTRUCTION,
        candidate_details: context.candidate_details,
        job_description: context.job_description,
        used_fallback: context.used_fallback,
    }))
}
