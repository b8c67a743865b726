use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status marker carried by successful analyses and delivery payloads.
pub const STATUS_COMPLETED: &str = "completed";

/// Outcome of analyzing one transcript.
///
/// Serialized untagged: the failure shape carries an `error` key and the
/// success shape does not, which is how the backend tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisEnvelope {
    Failed {
        error: String,
        /// Trimmed model text, kept for manual review when it could not be used.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw_response: Option<String>,
    },
    Completed {
        room_name: String,
        analysis: Value,
        status: String,
    },
}

impl AnalysisEnvelope {
    pub fn completed(room_name: impl Into<String>, analysis: Value) -> Self {
        AnalysisEnvelope::Completed {
            room_name: room_name.into(),
            analysis,
            status: STATUS_COMPLETED.to_string(),
        }
    }

    pub fn failed(error: impl Into<String>, raw_response: Option<String>) -> Self {
        AnalysisEnvelope::Failed {
            error: error.into(),
            raw_response,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, AnalysisEnvelope::Completed { .. })
    }

    pub fn analysis(&self) -> Option<&Value> {
        match self {
            AnalysisEnvelope::Completed { analysis, .. } => Some(analysis),
            AnalysisEnvelope::Failed { .. } => None,
        }
    }
}

/// Interview context attached to every envelope before delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordContext {
    pub candidate_details: String,
    pub job_description: String,
    pub room_name: String,
}

/// Envelope plus context: the unit that is dispatched and reported back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    #[serde(flatten)]
    pub envelope: AnalysisEnvelope,
    pub context: RecordContext,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> RecordContext {
        RecordContext {
            candidate_details: "Ada, 5 years Rust".into(),
            job_description: "Backend Engineer".into(),
            room_name: "room-42".into(),
        }
    }

    #[test]
    fn test_completed_serializes_without_error_key() {
        let envelope = AnalysisEnvelope::completed("room-42", json!({"candidateOverview": {}}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["room_name"], "room-42");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failed_without_raw_omits_field() {
        let value = serde_json::to_value(AnalysisEnvelope::failed("boom", None)).unwrap();
        assert_eq!(value, json!({"error": "boom"}));
    }

    #[test]
    fn test_record_flattens_envelope_next_to_context() {
        let record = AnalysisRecord {
            envelope: AnalysisEnvelope::failed("bad json", Some("not json".into())),
            context: context(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["error"], "bad json");
        assert_eq!(value["raw_response"], "not json");
        assert_eq!(value["context"]["room_name"], "room-42");
    }

    #[test]
    fn test_error_key_discriminates_on_read_back() {
        let failed: AnalysisEnvelope =
            serde_json::from_value(json!({"error": "x", "raw_response": "y"})).unwrap();
        assert!(!failed.is_completed());

        let completed: AnalysisEnvelope = serde_json::from_value(json!({
            "room_name": "r", "analysis": {"a": 1}, "status": "completed"
        }))
        .unwrap();
        assert_eq!(completed.analysis(), Some(&json!({"a": 1})));
    }
}
