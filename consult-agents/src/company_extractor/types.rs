use crate::service::ServiceError;
use extractors::RecordError;

/// Everything that can go wrong while extracting one document.
///
/// None of these escape [`CompanyExtractor::extract`](super::CompanyExtractor::extract);
/// they are logged and replaced by the fallback record.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Extraction service error: {0}")]
    Service(#[from] ServiceError),

    #[error("No data extracted from document")]
    NoData,

    #[error("Malformed extraction payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Record(#[from] RecordError),
}
