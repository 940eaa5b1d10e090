pub mod llama_cloud;

#[cfg(test)]
pub(crate) mod fake;

pub use llama_cloud::LlamaCloudClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_types::CompanyInfo;
use std::path::Path;

/// A named, schema-bound extraction configuration held by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentHandle {
    pub id: String,
    pub name: String,
}

/// What the service returned for one document
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedData {
    /// Loosely-typed mapping, still to be normalized and validated
    Raw(Map<String, Value>),
    /// Already a fully-typed record
    Typed(Box<CompanyInfo>),
    /// Anything that is not a mapping
    Unstructured(Value),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractionRun {
    pub data: Option<ExtractedData>,
}

impl ExtractionRun {
    /// Wraps the `data` member of a service response. `null` means no data.
    pub fn from_value(data: Value) -> Self {
        let data = match data {
            Value::Null => None,
            Value::Object(map) => Some(ExtractedData::Raw(map)),
            other => Some(ExtractedData::Unstructured(other)),
        };
        Self { data }
    }

    pub fn typed(info: CompanyInfo) -> Self {
        Self {
            data: Some(ExtractedData::Typed(Box::new(info))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Extraction job {job_id} ended with status {status}")]
    JobFailed { job_id: String, status: String },

    #[error("Extraction job {job_id} not finished after {polls} polls")]
    PollLimit { job_id: String, polls: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Remote document-understanding service
#[async_trait]
pub trait ExtractionService: Send + Sync {
    async fn list_agents(&self) -> Result<Vec<AgentHandle>, ServiceError>;

    async fn create_agent(&self, name: &str, schema: &Value) -> Result<AgentHandle, ServiceError>;

    /// Runs one document through `agent` and waits for the result
    async fn run_extraction(
        &self,
        agent: &AgentHandle,
        file_path: &Path,
    ) -> Result<ExtractionRun, ServiceError>;
}
