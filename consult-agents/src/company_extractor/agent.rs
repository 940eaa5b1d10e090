use crate::company_extractor::types::ExtractError;
use crate::provisioner::ensure_agent;
use crate::service::{ExtractedData, ExtractionService};
use extractors::{build_record, normalize};
use serde_json::Value;
use shared_types::CompanyInfo;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

pub struct CompanyExtractor {
    service: Arc<dyn ExtractionService>,
    agent_name: String,
    schema: Value,
}

impl CompanyExtractor {
    pub fn new(service: Arc<dyn ExtractionService>, agent_name: String, schema: Value) -> Self {
        Self {
            service,
            agent_name,
            schema,
        }
    }

    /// Extracts company information from one document. Never fails: any error
    /// is logged and the fallback record is returned instead.
    pub async fn extract(&self, file_path: &Path) -> CompanyInfo {
        let fallback_name = fallback_name(file_path);

        match self.try_extract(file_path, &fallback_name).await {
            Ok(info) => info,
            Err(err) => {
                tracing::warn!(
                    "Error extracting information from {}: {}",
                    file_path.display(),
                    err
                );
                tracing::warn!("Falling back to default values");
                CompanyInfo::fallback()
            }
        }
    }

    async fn try_extract(
        &self,
        file_path: &Path,
        fallback_name: &str,
    ) -> Result<CompanyInfo, ExtractError> {
        tracing::info!("Analyzing document with the extraction service");
        let started = Instant::now();

        let agent = ensure_agent(self.service.as_ref(), &self.agent_name, &self.schema).await?;
        let run = self.service.run_extraction(&agent, file_path).await?;

        tracing::info!(
            "Analysis completed in {:.2} seconds",
            started.elapsed().as_secs_f64()
        );

        match run.data {
            Some(ExtractedData::Raw(raw)) => Ok(build_record(normalize(raw, fallback_name))?),
            Some(ExtractedData::Typed(info)) => Ok(info.with_company_name_or(fallback_name)),
            Some(ExtractedData::Unstructured(value)) => {
                Err(ExtractError::MalformedPayload(describe(&value)))
            }
            None => Err(ExtractError::NoData),
        }
    }
}

/// File name without its extension
pub fn fallback_name(file_path: &Path) -> String {
    file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn describe(value: &Value) -> String {
    let kind = match value {
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Object(_) => "object",
        Value::Null => "null",
    };
    format!("expected an object, got {kind}")
}
