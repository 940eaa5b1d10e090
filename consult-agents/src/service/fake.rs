use super::{AgentHandle, ExtractionRun, ExtractionService, ServiceError};
use async_trait::async_trait;
use serde_json::Value;
use shared_types::CompanyInfo;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Scripted response for one file name
#[derive(Clone)]
pub(crate) enum FakeResponse {
    Data(Value),
    Typed(CompanyInfo),
    Fail(String),
}

/// In-memory stand-in for the remote service
#[derive(Default)]
pub(crate) struct FakeService {
    agents: Mutex<Vec<AgentHandle>>,
    responses: HashMap<String, FakeResponse>,
    list_error: Option<String>,
    create_error: Option<String>,
    pub(crate) created: Mutex<Vec<String>>,
    pub(crate) extracted: Mutex<Vec<PathBuf>>,
}

impl FakeService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_agent(self, id: &str, name: &str) -> Self {
        self.agents.lock().unwrap().push(AgentHandle {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub(crate) fn with_response(mut self, file_name: &str, response: FakeResponse) -> Self {
        self.responses.insert(file_name.to_string(), response);
        self
    }

    pub(crate) fn failing_list(mut self, message: &str) -> Self {
        self.list_error = Some(message.to_string());
        self
    }

    pub(crate) fn failing_create(mut self, message: &str) -> Self {
        self.create_error = Some(message.to_string());
        self
    }

    pub(crate) fn created_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

#[async_trait]
impl ExtractionService for FakeService {
    async fn list_agents(&self) -> Result<Vec<AgentHandle>, ServiceError> {
        if let Some(message) = &self.list_error {
            return Err(ServiceError::Api {
                status: 503,
                body: message.clone(),
            });
        }
        Ok(self.agents.lock().unwrap().clone())
    }

    async fn create_agent(&self, name: &str, _schema: &Value) -> Result<AgentHandle, ServiceError> {
        if let Some(message) = &self.create_error {
            return Err(ServiceError::Api {
                status: 409,
                body: message.clone(),
            });
        }

        let mut created = self.created.lock().unwrap();
        created.push(name.to_string());
        let agent = AgentHandle {
            id: format!("agent-{}", created.len()),
            name: name.to_string(),
        };
        self.agents.lock().unwrap().push(agent.clone());
        Ok(agent)
    }

    async fn run_extraction(
        &self,
        _agent: &AgentHandle,
        file_path: &Path,
    ) -> Result<ExtractionRun, ServiceError> {
        self.extracted.lock().unwrap().push(file_path.to_path_buf());

        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.responses.get(&file_name) {
            Some(FakeResponse::Data(value)) => Ok(ExtractionRun::from_value(value.clone())),
            Some(FakeResponse::Typed(info)) => Ok(ExtractionRun::typed(info.clone())),
            Some(FakeResponse::Fail(message)) => Err(ServiceError::Api {
                status: 500,
                body: message.clone(),
            }),
            None => Ok(ExtractionRun::default()),
        }
    }
}
