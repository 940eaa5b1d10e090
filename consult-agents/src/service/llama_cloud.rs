//! LlamaCloud extraction API client
//!
//! Agents are listed and created under `/api/v1/extraction/extraction-agents`.
//! Running an extraction is a four step exchange: upload the file, create a
//! job for the agent, poll the job until it reaches a terminal status, then
//! fetch the job result.

use super::{AgentHandle, ExtractionRun, ExtractionService, ServiceError};
use crate::config::LlamaCloudConfig;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

#[derive(Serialize)]
struct CreateAgentRequest<'a> {
    name: &'a str,
    data_schema: &'a Value,
    config: AgentConfig<'a>,
}

#[derive(Serialize)]
struct AgentConfig<'a> {
    extraction_mode: &'a str,
}

#[derive(Serialize)]
struct CreateJobRequest<'a> {
    extraction_agent_id: &'a str,
    file_id: &'a str,
}

#[derive(Deserialize)]
struct UploadedFile {
    id: String,
}

#[derive(Deserialize)]
struct ExtractionJob {
    id: String,
    /// Wire status, kept verbatim for error messages
    status: String,
}

impl ExtractionJob {
    fn status(&self) -> JobStatus {
        JobStatus::from_wire(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JobStatus {
    Pending,
    Success,
    PartialSuccess,
    Error,
    Cancelled,
    Unknown,
}

impl JobStatus {
    fn from_wire(status: &str) -> Self {
        match status {
            "PENDING" => Self::Pending,
            "SUCCESS" => Self::Success,
            "PARTIAL_SUCCESS" => Self::PartialSuccess,
            "ERROR" => Self::Error,
            "CANCELLED" => Self::Cancelled,
            _ => Self::Unknown,
        }
    }

    fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending)
    }

    fn has_result(&self) -> bool {
        matches!(self, JobStatus::Success | JobStatus::PartialSuccess)
    }
}

#[derive(Deserialize)]
struct JobResult {
    #[serde(default)]
    data: Value,
}

pub struct LlamaCloudClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    project_id: Option<String>,
    extraction_mode: String,
    poll_interval: Duration,
    max_polls: Option<u32>,
}

impl LlamaCloudClient {
    pub fn new(api_key: String, config: &LlamaCloudConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.resolved_base_url(),
            api_key,
            project_id: config.project_id.clone(),
            extraction_mode: config.extraction_mode.clone(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_polls: (config.max_polls > 0).then_some(config.max_polls),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn project_query(&self) -> Vec<(&'static str, &str)> {
        self.project_id
            .as_deref()
            .map(|id| vec![("project_id", id)])
            .unwrap_or_default()
    }

    async fn upload_file(&self, file_path: &Path) -> Result<String, ServiceError> {
        let bytes = tokio::fs::read(file_path).await?;
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        let form = Form::new().part("upload_file", Part::bytes(bytes).file_name(file_name));

        let response = self
            .http
            .post(self.url("files"))
            .bearer_auth(&self.api_key)
            .query(&self.project_query())
            .multipart(form)
            .send()
            .await?;

        let uploaded: UploadedFile = check(response).await?.json().await?;
        if uploaded.id.is_empty() {
            return Err(ServiceError::InvalidResponse(
                "file upload returned an empty id".to_string(),
            ));
        }
        tracing::debug!("Uploaded {} as file {}", file_path.display(), uploaded.id);
        Ok(uploaded.id)
    }

    async fn create_job(&self, agent_id: &str, file_id: &str) -> Result<ExtractionJob, ServiceError> {
        let response = self
            .http
            .post(self.url("extraction/jobs"))
            .bearer_auth(&self.api_key)
            .json(&CreateJobRequest {
                extraction_agent_id: agent_id,
                file_id,
            })
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn get_job(&self, job_id: &str) -> Result<ExtractionJob, ServiceError> {
        let response = self
            .http
            .get(self.url(&format!("extraction/jobs/{job_id}")))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn wait_for_job(&self, job: ExtractionJob) -> Result<ExtractionJob, ServiceError> {
        let mut job = job;
        let mut polls = 0u32;

        while !job.status().is_terminal() {
            if let Some(max_polls) = self.max_polls {
                if polls >= max_polls {
                    return Err(ServiceError::PollLimit {
                        job_id: job.id,
                        polls,
                    });
                }
            }

            tokio::time::sleep(self.poll_interval).await;
            job = self.get_job(&job.id).await?;
            polls += 1;
        }

        Ok(job)
    }

    async fn get_result(&self, job_id: &str) -> Result<JobResult, ServiceError> {
        let response = self
            .http
            .get(self.url(&format!("extraction/jobs/{job_id}/result")))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }
}

/// Turns non-success responses into [`ServiceError::Api`]
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    Err(ServiceError::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ExtractionService for LlamaCloudClient {
    async fn list_agents(&self) -> Result<Vec<AgentHandle>, ServiceError> {
        let response = self
            .http
            .get(self.url("extraction/extraction-agents"))
            .bearer_auth(&self.api_key)
            .query(&self.project_query())
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn create_agent(&self, name: &str, schema: &Value) -> Result<AgentHandle, ServiceError> {
        let response = self
            .http
            .post(self.url("extraction/extraction-agents"))
            .bearer_auth(&self.api_key)
            .query(&self.project_query())
            .json(&CreateAgentRequest {
                name,
                data_schema: schema,
                config: AgentConfig {
                    extraction_mode: &self.extraction_mode,
                },
            })
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn run_extraction(
        &self,
        agent: &AgentHandle,
        file_path: &Path,
    ) -> Result<ExtractionRun, ServiceError> {
        let file_id = self.upload_file(file_path).await?;
        let job = self.create_job(&agent.id, &file_id).await?;
        tracing::debug!("Created extraction job {} for agent {}", job.id, agent.name);

        let job = self.wait_for_job(job).await?;
        if !job.status().has_result() {
            return Err(ServiceError::JobFailed {
                job_id: job.id,
                status: job.status,
            });
        }

        let result = self.get_result(&job.id).await?;
        Ok(ExtractionRun::from_value(result.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Region, EU_BASE_URL};
    use crate::service::ExtractedData;
    use serde_json::json;

    fn client(config: &LlamaCloudConfig) -> LlamaCloudClient {
        LlamaCloudClient::new("llx-test".to_string(), config).unwrap()
    }

    #[test]
    fn test_url_building() {
        let config = LlamaCloudConfig {
            region: Region::Eu,
            ..LlamaCloudConfig::default()
        };
        let client = client(&config);

        assert_eq!(
            client.url("extraction/jobs/abc/result"),
            format!("{EU_BASE_URL}/api/v1/extraction/jobs/abc/result")
        );
        assert_eq!(client.url("/files"), format!("{EU_BASE_URL}/api/v1/files"));
    }

    #[test]
    fn test_poll_limit_from_config() {
        let unbounded = client(&LlamaCloudConfig::default());
        assert_eq!(unbounded.max_polls, None);

        let bounded = client(&LlamaCloudConfig {
            max_polls: 5,
            ..LlamaCloudConfig::default()
        });
        assert_eq!(bounded.max_polls, Some(5));
    }

    #[test]
    fn test_project_query() {
        assert!(client(&LlamaCloudConfig::default()).project_query().is_empty());

        let scoped = client(&LlamaCloudConfig {
            project_id: Some("proj-1".to_string()),
            ..LlamaCloudConfig::default()
        });
        assert_eq!(scoped.project_query(), vec![("project_id", "proj-1")]);
    }

    #[test]
    fn test_job_status_parsing() {
        let job: ExtractionJob =
            serde_json::from_value(json!({ "id": "job-1", "status": "PENDING" })).unwrap();
        assert!(!job.status().is_terminal());

        let job: ExtractionJob =
            serde_json::from_value(json!({ "id": "job-1", "status": "PARTIAL_SUCCESS" }))
                .unwrap();
        assert!(job.status().has_result());

        let job: ExtractionJob =
            serde_json::from_value(json!({ "id": "job-1", "status": "ERROR" })).unwrap();
        assert!(job.status().is_terminal());
        assert!(!job.status().has_result());

        let job: ExtractionJob =
            serde_json::from_value(json!({ "id": "job-1", "status": "THROTTLED" })).unwrap();
        assert_eq!(job.status(), JobStatus::Unknown);
        assert_eq!(job.status, "THROTTLED");
    }

    #[test]
    fn test_agent_list_parsing_ignores_extra_fields() {
        let agents: Vec<AgentHandle> = serde_json::from_value(json!([
            {
                "id": "agent-1",
                "name": "company-info-extractor",
                "project_id": "proj-1",
                "data_schema": {},
                "config": { "extraction_mode": "BALANCED" }
            }
        ]))
        .unwrap();

        assert_eq!(agents[0].id, "agent-1");
        assert_eq!(agents[0].name, "company-info-extractor");
    }

    #[test]
    fn test_job_result_parsing() {
        let result: JobResult = serde_json::from_value(json!({
            "run_id": "run-1",
            "data": { "company_name": "Acme" },
            "extraction_metadata": {}
        }))
        .unwrap();
        let run = ExtractionRun::from_value(result.data);
        assert!(matches!(run.data, Some(ExtractedData::Raw(_))));

        let result: JobResult = serde_json::from_value(json!({ "run_id": "run-2" })).unwrap();
        assert_eq!(ExtractionRun::from_value(result.data).data, None);
    }

    /// Minimal stand-in for the extraction API, scripted per test
    mod stub {
        use axum::extract::{Path, State};
        use axum::http::HeaderMap;
        use axum::routing::{get, post};
        use axum::{Json, Router};
        use serde_json::{json, Value};
        use std::collections::VecDeque;
        use std::sync::{Arc, Mutex};

        pub struct StubState {
            /// Statuses returned by successive polls; the last one repeats
            statuses: Mutex<VecDeque<&'static str>>,
            pub calls: Mutex<Vec<String>>,
            pub auth: Mutex<Vec<String>>,
        }

        impl StubState {
            fn record(&self, call: String, headers: &HeaderMap) {
                self.calls.lock().unwrap().push(call);
                if let Some(value) = headers.get("authorization") {
                    self.auth
                        .lock()
                        .unwrap()
                        .push(value.to_str().unwrap().to_string());
                }
            }

            fn next_status(&self) -> &'static str {
                let mut statuses = self.statuses.lock().unwrap();
                if statuses.len() > 1 {
                    statuses.pop_front().unwrap()
                } else {
                    statuses.front().copied().unwrap_or("PENDING")
                }
            }

            pub fn calls(&self) -> Vec<String> {
                self.calls.lock().unwrap().clone()
            }
        }

        async fn upload(
            State(state): State<Arc<StubState>>,
            headers: HeaderMap,
            _body: axum::body::Bytes,
        ) -> Json<Value> {
            state.record("upload".to_string(), &headers);
            Json(json!({ "id": "file-1", "name": "acme.docx" }))
        }

        async fn create_job(
            State(state): State<Arc<StubState>>,
            headers: HeaderMap,
            Json(body): Json<Value>,
        ) -> Json<Value> {
            state.record(
                format!(
                    "create_job {} {}",
                    body["extraction_agent_id"].as_str().unwrap_or_default(),
                    body["file_id"].as_str().unwrap_or_default()
                ),
                &headers,
            );
            Json(json!({ "id": "job-1", "status": "PENDING" }))
        }

        async fn get_job(
            State(state): State<Arc<StubState>>,
            headers: HeaderMap,
            Path(job_id): Path<String>,
        ) -> Json<Value> {
            state.record(format!("poll {job_id}"), &headers);
            Json(json!({ "id": job_id, "status": state.next_status() }))
        }

        async fn get_result(
            State(state): State<Arc<StubState>>,
            headers: HeaderMap,
            Path(job_id): Path<String>,
        ) -> Json<Value> {
            state.record(format!("result {job_id}"), &headers);
            Json(json!({
                "run_id": "run-1",
                "data": { "company_name": "Acme Robotics" }
            }))
        }

        /// Serves the stub on an ephemeral port and returns its base URL
        pub async fn serve(statuses: &[&'static str]) -> (String, Arc<StubState>) {
            let state = Arc::new(StubState {
                statuses: Mutex::new(statuses.iter().copied().collect()),
                calls: Mutex::default(),
                auth: Mutex::default(),
            });

            let app = Router::new()
                .route("/api/v1/files", post(upload))
                .route("/api/v1/extraction/jobs", post(create_job))
                .route("/api/v1/extraction/jobs/:job_id", get(get_job))
                .route("/api/v1/extraction/jobs/:job_id/result", get(get_result))
                .with_state(state.clone());

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            (format!("http://{addr}"), state)
        }
    }

    fn stub_client(base_url: String, max_polls: u32) -> LlamaCloudClient {
        client(&LlamaCloudConfig {
            base_url: Some(base_url),
            poll_interval_ms: 1,
            max_polls,
            ..LlamaCloudConfig::default()
        })
    }

    fn agent() -> AgentHandle {
        AgentHandle {
            id: "agent-7".to_string(),
            name: "company-info-extractor".to_string(),
        }
    }

    fn document() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"consultation notes").unwrap();
        file
    }

    #[tokio::test]
    async fn test_run_extraction_uploads_polls_and_fetches_result() {
        let (base_url, state) = stub::serve(&["PENDING", "SUCCESS"]).await;
        let file = document();

        let run = stub_client(base_url, 0)
            .run_extraction(&agent(), file.path())
            .await
            .unwrap();

        match run.data {
            Some(ExtractedData::Raw(map)) => assert_eq!(map["company_name"], "Acme Robotics"),
            other => panic!("unexpected data: {other:?}"),
        }
        assert_eq!(
            state.calls(),
            vec![
                "upload",
                "create_job agent-7 file-1",
                "poll job-1",
                "poll job-1",
                "result job-1"
            ]
        );
        assert!(state
            .auth
            .lock()
            .unwrap()
            .iter()
            .all(|value| value == "Bearer llx-test"));
    }

    #[tokio::test]
    async fn test_partial_success_still_fetches_result() {
        let (base_url, state) = stub::serve(&["PARTIAL_SUCCESS"]).await;
        let file = document();

        let run = stub_client(base_url, 0)
            .run_extraction(&agent(), file.path())
            .await
            .unwrap();

        assert!(matches!(run.data, Some(ExtractedData::Raw(_))));
        assert_eq!(state.calls().last().map(String::as_str), Some("result job-1"));
    }

    #[tokio::test]
    async fn test_failed_job_reports_wire_status() {
        for status in ["ERROR", "CANCELLED", "THROTTLED"] {
            let (base_url, state) = stub::serve(&[status]).await;
            let file = document();

            let err = stub_client(base_url, 0)
                .run_extraction(&agent(), file.path())
                .await
                .unwrap_err();

            match err {
                ServiceError::JobFailed { job_id, status: reported } => {
                    assert_eq!(job_id, "job-1");
                    assert_eq!(reported, status);
                }
                other => panic!("unexpected error for {status}: {other}"),
            }
            assert!(!state.calls().iter().any(|call| call.starts_with("result")));
        }
    }

    #[tokio::test]
    async fn test_poll_limit_stops_waiting() {
        let (base_url, state) = stub::serve(&["PENDING"]).await;
        let file = document();

        let err = stub_client(base_url, 3)
            .run_extraction(&agent(), file.path())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::PollLimit { polls: 3, .. }));
        let polls = state
            .calls()
            .iter()
            .filter(|call| call.starts_with("poll"))
            .count();
        assert_eq!(polls, 3);
    }

    #[tokio::test]
    async fn test_unknown_route_is_api_error() {
        let (base_url, _state) = stub::serve(&["SUCCESS"]).await;

        let err = stub_client(base_url, 0).list_agents().await.unwrap_err();

        assert!(matches!(err, ServiceError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_missing_document_is_io_error() {
        let (base_url, state) = stub::serve(&["SUCCESS"]).await;

        let err = stub_client(base_url, 0)
            .run_extraction(&agent(), std::path::Path::new("does/not/exist.docx"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Io(_)));
        assert!(state.calls().is_empty());
    }
}
