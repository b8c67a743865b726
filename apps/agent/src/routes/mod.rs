pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers::handle_get_instructions;
use crate::session::handlers::handle_post_transcript;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session start: room context + interviewer instructions
        .route(
            "/api/v1/rooms/:room_name/instructions",
            get(handle_get_instructions),
        )
        // Session shutdown: persist, analyze, dispatch
        .route(
            "/api/v1/rooms/:room_name/transcript",
            post(handle_post_transcript),
        )
        .with_state(state)
}
