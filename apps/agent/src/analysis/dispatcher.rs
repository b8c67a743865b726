//! Result Dispatcher — one best-effort POST of the analysis record to the backend.
//!
//! Delivery is fire-and-forget: the transcript is already on disk, so a lost
//! delivery is logged and reported as an outcome, never raised as an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::envelope::{AnalysisRecord, STATUS_COMPLETED};

pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(30);
const RECEIVE_PATH: &str = "/api/analysis/receive";

/// What happened to one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Delivered,
    /// The backend answered with something other than 200.
    Rejected { status: u16 },
    /// Timeout or connection failure.
    Failed { reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Destination for finished analysis records.
#[async_trait]
pub trait AnalysisSink: Send + Sync {
    async fn deliver(&self, record: &AnalysisRecord, room_name: &str) -> DeliveryOutcome;
}

#[derive(Debug, Serialize)]
struct DeliveryPayload<'a> {
    room_name: &'a str,
    analysis: &'a AnalysisRecord,
    status: &'a str,
}

/// HTTP sink posting to `{backend}/api/analysis/receive`.
#[derive(Clone)]
pub struct ResultDispatcher {
    client: Client,
    endpoint: String,
}

impl ResultDispatcher {
    pub fn new(
        backend_url: &str,
        timeout: Duration,
        accept_invalid_certs: bool,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", backend_url.trim_end_matches('/'), RECEIVE_PATH),
        })
    }
}

#[async_trait]
impl AnalysisSink for ResultDispatcher {
    async fn deliver(&self, record: &AnalysisRecord, room_name: &str) -> DeliveryOutcome {
        let payload = DeliveryPayload {
            room_name,
            analysis: record,
            status: STATUS_COMPLETED,
        };

        let outcome = match self.client.post(&self.endpoint).json(&payload).send().await {
            Ok(response) if response.status() == StatusCode::OK => DeliveryOutcome::Delivered,
            Ok(response) => DeliveryOutcome::Rejected {
                status: response.status().as_u16(),
            },
            Err(e) if e.is_timeout() => DeliveryOutcome::Failed {
                reason: format!("timed out: {e}"),
            },
            Err(e) => DeliveryOutcome::Failed {
                reason: e.to_string(),
            },
        };

        match &outcome {
            DeliveryOutcome::Delivered => info!("Analysis for room {room_name} delivered"),
            DeliveryOutcome::Rejected { status } => {
                warn!("Backend rejected analysis for room {room_name}: status {status}")
            }
            DeliveryOutcome::Failed { reason } => {
                warn!("Error sending analysis for room {room_name}: {reason}")
            }
        }
        outcome
    }
}
