//! Room data fetch — candidate and role text for a room, from the backend.
//!
//! Never fails: transport errors, bad statuses, bad bodies and missing fields
//! all degrade to fallback text, each field on its own.

use std::time::Duration;

use anyhow::{anyhow, Context};
use reqwest::{Client, Url};
use tracing::{info, warn};

use crate::interview::prompts::{FALLBACK_CANDIDATE_DETAILS, FALLBACK_JOB_DESCRIPTION};
use crate::models::room::{InterviewContext, RoomAnalysisData, RoomResponse};

pub const ROOM_FETCH_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Clone)]
pub struct RoomDataClient {
    client: Client,
    backend_url: String,
}

impl RoomDataClient {
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
            backend_url: backend_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the interview context for `room_name`, falling back per field.
    pub async fn fetch(&self, room_name: &str) -> InterviewContext {
        let data = match self.fetch_raw(room_name).await {
            Ok(data) => {
                info!("Retrieved room data for {room_name}");
                data
            }
            Err(e) => {
                warn!("Error fetching room data for {room_name}: {e}");
                RoomAnalysisData::default()
            }
        };
        resolve_context(data.candidate_details, data.job_description)
    }

    async fn fetch_raw(&self, room_name: &str) -> anyhow::Result<RoomAnalysisData> {
        let body: RoomResponse = self
            .client
            .get(self.room_url(room_name)?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.analysis_data.unwrap_or_default())
    }

    /// `{backend}/api/room/{room_name}` with the room name as one escaped path segment.
    fn room_url(&self, room_name: &str) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.backend_url)
            .with_context(|| format!("Invalid backend URL '{}'", self.backend_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Backend URL '{}' cannot have a path", self.backend_url))?
            .pop_if_empty()
            .extend(["api", "room", room_name]);
        Ok(url)
    }
}

/// Fills absent or blank fields with fallback text.
pub fn resolve_context(
    candidate_details: Option<String>,
    job_description: Option<String>,
) -> InterviewContext {
    let candidate_details = candidate_details.filter(|s| !s.trim().is_empty());
    let job_description = job_description.filter(|s| !s.trim().is_empty());
    let used_fallback = candidate_details.is_none() || job_description.is_none();
    if used_fallback {
        warn!("Using fallback candidate details or job description");
    }

    InterviewContext {
        candidate_details: candidate_details
            .unwrap_or_else(|| FALLBACK_CANDIDATE_DETAILS.to_string()),
        job_description: job_description.unwrap_or_else(|| FALLBACK_JOB_DESCRIPTION.to_string()),
        used_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::instructions::PromptTemplate;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, timeout: Duration) -> RoomDataClient {
        RoomDataClient::new(&server.uri(), timeout, false).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_reads_analysis_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/room/room-3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "roomName": "room-3",
                "analysisData": {
                    "candidateDetails": "Ada, 5 years Rust",
                    "jobDescription": "Backend Engineer"
                }
            })))
            .mount(&server)
            .await;

        let context = client(&server, ROOM_FETCH_TIMEOUT).fetch("room-3").await;
        assert_eq!(context.candidate_details, "Ada, 5 years Rust");
        assert_eq!(context.job_description, "Backend Engineer");
        assert!(!context.used_fallback);
    }

    #[tokio::test]
    async fn test_timeout_falls_back_and_prompt_still_renders() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"analysisData": {"candidateDetails": "late"}}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let context = client(&server, Duration::from_millis(200)).fetch("room-3").await;
        assert_eq!(context.candidate_details, FALLBACK_CANDIDATE_DETAILS);
        assert_eq!(context.job_description, FALLBACK_JOB_DESCRIPTION);
        assert!(context.used_fallback);

        let template =
            PromptTemplate::parse("{candidate_details_text}\n{job_description}").unwrap();
        let rendered = template.render(&context.candidate_details, &context.job_description);
        assert!(rendered.contains(FALLBACK_JOB_DESCRIPTION));
    }

    #[tokio::test]
    async fn test_http_error_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let context = client(&server, ROOM_FETCH_TIMEOUT).fetch("missing").await;
        assert_eq!(context.candidate_details, FALLBACK_CANDIDATE_DETAILS);
        assert_eq!(context.job_description, FALLBACK_JOB_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_missing_field_falls_back_independently() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "analysisData": {"candidateDetails": "Ada", "jobDescription": ""}
            })))
            .mount(&server)
            .await;

        let context = client(&server, ROOM_FETCH_TIMEOUT).fetch("room-3").await;
        assert_eq!(context.candidate_details, "Ada");
        assert_eq!(context.job_description, FALLBACK_JOB_DESCRIPTION);
        assert!(context.used_fallback);
    }

    #[test]
    fn test_resolve_context_keeps_present_values() {
        let context = resolve_context(Some("C".into()), Some("J".into()));
        assert_eq!(context.candidate_details, "C");
        assert_eq!(context.job_description, "J");
        assert!(!context.used_fallback);
    }

    #[test]
    fn test_room_url_escapes_room_name() {
        let client =
            RoomDataClient::new("https://backend.local/", ROOM_FETCH_TIMEOUT, false).unwrap();
        let url = client.room_url("room 5#a?b/c").unwrap();
        assert_eq!(
            url.as_str(),
            "https://backend.local/api/room/room%205%23a%3Fb%2Fc"
        );
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_room_url_keeps_backend_path_prefix() {
        let client =
            RoomDataClient::new("http://host:8000/v2", ROOM_FETCH_TIMEOUT, false).unwrap();
        let url = client.room_url("r1").unwrap();
        assert_eq!(url.as_str(), "http://host:8000/v2/api/room/r1");
    }

    #[tokio::test]
    async fn test_fetch_sends_escaped_room_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/room/room%205%23a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "analysisData": {"candidateDetails": "Ada", "jobDescription": "SRE"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let context = client(&server, ROOM_FETCH_TIMEOUT).fetch("room 5#a").await;
        assert_eq!(context.candidate_details, "Ada");
        assert!(!context.used_fallback);
    }
}
