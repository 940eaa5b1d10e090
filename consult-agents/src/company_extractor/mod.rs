pub mod agent;
pub mod types;

pub use agent::{fallback_name, CompanyExtractor};
pub use types::ExtractError;
