use serde_json::{Map, Value};
use shared_types::CompanyInfo;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Schema validation failed: {0}")]
    Validation(#[from] serde_json::Error),

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),
}

/// Builds a record from a normalized payload, validating it against the schema.
///
/// Every field is required and every category must belong to its closed set.
/// Multi-choice lists and the company name must not be empty.
pub fn build_record(cleaned: Map<String, Value>) -> Result<CompanyInfo, RecordError> {
    let info: CompanyInfo = serde_json::from_value(Value::Object(cleaned))?;

    if info.company_name.trim().is_empty() {
        return Err(RecordError::EmptyField("company_name"));
    }
    if info.target_market.target_group.is_empty() {
        return Err(RecordError::EmptyField("target_market.target_group"));
    }
    if info.data_requirements.data_type.is_empty() {
        return Err(RecordError::EmptyField("data_requirements.data_type"));
    }
    if info.fair_services_sought.services.is_empty() {
        return Err(RecordError::EmptyField("fair_services_sought.services"));
    }

    Ok(info)
}
