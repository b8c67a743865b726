//! Transcript Analyzer — asks the model for a hiring report and turns whatever
//! text comes back into an `AnalysisEnvelope`.
//!
//! Flow: serialize transcript → model call → strip one code fence → parse JSON
//!       → reject falsy values → (strict mode) typed decode → envelope.
//!
//! `analyze` never returns an error: every failure becomes `AnalysisEnvelope::Failed`.

use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::analysis::envelope::AnalysisEnvelope;
use crate::analysis::prompts::{ANALYSIS_SYSTEM, NO_ANALYSIS_DATA};
use crate::analysis::report::{summarize, AnalysisReport};
use crate::llm_client::{strip_json_fences, TextModel};
use crate::models::transcript::Transcript;

/// How much of the report schema is enforced on model output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaMode {
    /// Any JSON value is accepted as the analysis; consumers tolerate drift.
    #[default]
    Lenient,
    /// The value must decode into `AnalysisReport`.
    Strict,
}

impl FromStr for SchemaMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(SchemaMode::Lenient),
            "strict" => Ok(SchemaMode::Strict),
            other => Err(format!("unknown schema mode '{other}'")),
        }
    }
}

pub struct TranscriptAnalyzer {
    model: Arc<dyn TextModel>,
    mode: SchemaMode,
}

impl TranscriptAnalyzer {
    pub fn new(model: Arc<dyn TextModel>, mode: SchemaMode) -> Self {
        Self { model, mode }
    }

    pub fn mode(&self) -> SchemaMode {
        self.mode
    }

    /// Produces the analysis envelope for one transcript.
    pub async fn analyze(&self, transcript: &Transcript, room_name: &str) -> AnalysisEnvelope {
        let input = match transcript.to_model_input() {
            Ok(input) => input,
            Err(e) => {
                warn!("Could not serialize transcript for room {room_name}: {e}");
                return AnalysisEnvelope::failed(format!("Failed to serialize transcript: {e}"), None);
            }
        };

        info!(
            "Analyzing {} history items ({} turns) for room {} with {}",
            transcript.len(),
            transcript.turns().count(),
            room_name,
            self.model.name()
        );

        let text = match self.model.generate(ANALYSIS_SYSTEM, &input).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Model request failed for room {room_name}: {e}");
                return AnalysisEnvelope::failed(format!("Model request failed: {e}"), None);
            }
        };

        let envelope = self.interpret(&text, room_name);
        match &envelope {
            AnalysisEnvelope::Completed { analysis, .. } => {
                let (status, score) = summarize(analysis);
                info!(
                    "Analysis completed for room {}: recommendation={}, score={}",
                    room_name,
                    status.unwrap_or("n/a"),
                    score.map(|s| s.to_string()).unwrap_or_else(|| "n/a".into())
                );
            }
            AnalysisEnvelope::Failed { error, .. } => {
                warn!("Analysis failed for room {room_name}: {error}");
            }
        }
        envelope
    }

    /// Turns raw model text into an envelope.
    pub fn interpret(&self, text: &str, room_name: &str) -> AnalysisEnvelope {
        let raw = text.trim();
        let cleaned = strip_json_fences(raw);

        let parsed: Value = match serde_json::from_str(&cleaned) {
            Ok(value) => value,
            Err(e) => {
                return AnalysisEnvelope::failed(
                    format!("Failed to parse model response as JSON: {e}"),
                    Some(raw.to_string()),
                )
            }
        };

        if is_falsy(&parsed) {
            return AnalysisEnvelope::failed(NO_ANALYSIS_DATA, None);
        }

        if self.mode == SchemaMode::Strict {
            if let Err(e) = serde_json::from_value::<AnalysisReport>(parsed.clone()) {
                return AnalysisEnvelope::failed(
                    format!("Model response does not match analysis schema: {e}"),
                    Some(raw.to_string()),
                );
            }
        }

        AnalysisEnvelope::completed(room_name, parsed)
    }
}

/// Empty-ish JSON: null, false, zero, "", [] or {}.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
