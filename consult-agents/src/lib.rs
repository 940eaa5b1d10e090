pub mod company_extractor;
pub mod config;
pub mod pipeline;
pub mod provisioner;
pub mod service;

pub use company_extractor::{CompanyExtractor, ExtractError};
pub use config::{AppConfig, LlamaCloudConfig, PipelineConfig, Region};
pub use pipeline::{list_documents, process_documents};
pub use provisioner::ensure_agent;
pub use service::{
    AgentHandle, ExtractedData, ExtractionRun, ExtractionService, LlamaCloudClient, ServiceError,
};
