use std::path::PathBuf;
use std::sync::Arc;

use crate::interview::room_data::RoomDataClient;
use crate::session::pipeline::SessionFinalizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub room_data: RoomDataClient,
    /// Re-read on every session start so template edits apply without a restart.
    pub prompt_template_path: Arc<PathBuf>,
    pub finalizer: SessionFinalizer,
}
