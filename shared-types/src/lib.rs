pub mod category;
pub mod company_info;

pub use category::{
    join_labels, AiField, Category, CompanyType, ConsultationType, DataType, Domain,
    MaturityLevel, Service, TargetGroup, NOT_AVAILABLE,
};
pub use company_info::{
    CompanyAiField, CompanyDomain, CompanyInfo, CompanyTargetGroup, DataRequirements,
    ServicesDescriptions, UNKNOWN_EXPERTS,
};
