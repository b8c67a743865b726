//! Session shutdown sequence.
//!
//! Flow: empty? → persist transcript → analyze → attach context → dispatch.
//!
//! The transcript is on disk before the model is called, so analysis and
//! delivery stay best-effort. Nothing in here returns an error to the caller.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::analyzer::TranscriptAnalyzer;
use crate::analysis::dispatcher::{AnalysisSink, DeliveryOutcome};
use crate::analysis::envelope::{AnalysisRecord, RecordContext};
use crate::models::room::InterviewContext;
use crate::models::transcript::Transcript;
use crate::session::store::TranscriptStore;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The session produced no turns; nothing was written or analyzed.
    Empty,
    Processed {
        transcript_path: PathBuf,
        record: AnalysisRecord,
        delivery: DeliveryOutcome,
    },
    /// The transcript could not be persisted, so nothing further ran.
    Aborted { reason: String },
}

/// Analyzes a transcript, attaches the interview context and hands the record
/// to the sink. Returns the record whatever the delivery outcome.
pub async fn process_transcript_post_interview(
    analyzer: &TranscriptAnalyzer,
    sink: &dyn AnalysisSink,
    transcript: &Transcript,
    room_name: &str,
    context: &InterviewContext,
) -> (AnalysisRecord, DeliveryOutcome) {
    let envelope = analyzer.analyze(transcript, room_name).await;
    let record = AnalysisRecord {
        envelope,
        context: RecordContext {
            candidate_details: context.candidate_details.clone(),
            job_description: context.job_description.clone(),
            room_name: room_name.to_string(),
        },
    };
    let delivery = sink.deliver(&record, room_name).await;
    (record, delivery)
}

/// Runs the shutdown sequence for finished sessions.
#[derive(Clone)]
pub struct SessionFinalizer {
    store: TranscriptStore,
    analyzer: Arc<TranscriptAnalyzer>,
    sink: Arc<dyn AnalysisSink>,
}

impl SessionFinalizer {
    pub fn new(
        store: TranscriptStore,
        analyzer: Arc<TranscriptAnalyzer>,
        sink: Arc<dyn AnalysisSink>,
    ) -> Self {
        Self {
            store,
            analyzer,
            sink,
        }
    }

    pub async fn finalize(
        &self,
        room_name: &str,
        transcript: &Transcript,
        context: &InterviewContext,
    ) -> SessionOutcome {
        if transcript.is_empty() {
            warn!("No transcript data to save for room {room_name}");
            return SessionOutcome::Empty;
        }

        let transcript_path = match self.store.persist(room_name, transcript) {
            Ok(path) => path,
            Err(e) => {
                warn!("Error saving transcript for room {room_name}: {e}");
                return SessionOutcome::Aborted {
                    reason: e.to_string(),
                };
            }
        };

        let (record, delivery) = process_transcript_post_interview(
            &self.analyzer,
            self.sink.as_ref(),
            transcript,
            room_name,
            context,
        )
        .await;

        info!(
            "Session {} finalized: analysis_completed={}, delivered={}",
            room_name,
            record.envelope.is_completed(),
            delivery.is_delivered()
        );

        SessionOutcome::Processed {
            transcript_path,
            record,
            delivery,
        }
    }
}
