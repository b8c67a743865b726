use serde::{Deserialize, Serialize};

/// Candidate and role text an interview is conducted against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewContext {
    pub candidate_details: String,
    pub job_description: String,
    /// True when at least one field was replaced by fallback text.
    #[serde(default)]
    pub used_fallback: bool,
}

/// Body of `GET {backend}/api/room/{room_name}`. Only the fields this
/// service reads are modeled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    #[serde(default)]
    pub analysis_data: Option<RoomAnalysisData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAnalysisData {
    #[serde(default)]
    pub candidate_details: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}
