use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Placeholder rendered for any field the extraction could not provide
pub const NOT_AVAILABLE: &str = "n/a";

/// A closed set of labels shared with the extraction service.
///
/// Every set carries an `Unavailable` member that renders as [`NOT_AVAILABLE`].
/// It only exists so a fallback record can be built; it is never accepted when
/// deserializing service output and is left out of the generated schema.
pub trait Category: Copy + Into<&'static str> {
    /// Human-readable label, as exported to the spreadsheet
    fn label(self) -> &'static str {
        self.into()
    }

    fn is_available(self) -> bool {
        self.label() != NOT_AVAILABLE
    }
}

/// Joins multi-choice labels the way they appear in a single cell
pub fn join_labels<C: Category>(items: &[C]) -> String {
    items
        .iter()
        .map(|item| item.label())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
    EnumString, EnumIter, IntoStaticStr,
)]
pub enum ConsultationType {
    #[serde(rename = "Regular")]
    #[strum(serialize = "Regular")]
    Regular,
    #[serde(rename = "Pop-up")]
    #[strum(serialize = "Pop-up")]
    PopUp,
    #[serde(rename = "n/a", skip_deserializing)]
    #[strum(serialize = "n/a")]
    Unavailable,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
    EnumString, EnumIter, IntoStaticStr,
)]
pub enum MaturityLevel {
    #[serde(rename = "Low")]
    #[strum(serialize = "Low")]
    Low,
    #[serde(rename = "Moderate")]
    #[strum(serialize = "Moderate")]
    Moderate,
    #[serde(rename = "High")]
    #[strum(serialize = "High")]
    High,
    #[serde(rename = "n/a", skip_deserializing)]
    #[strum(serialize = "n/a")]
    Unavailable,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
    EnumString, EnumIter, IntoStaticStr,
)]
pub enum CompanyType {
    #[serde(rename = "Startup")]
    #[strum(serialize = "Startup")]
    Startup,
    #[serde(rename = "Established company")]
    #[strum(serialize = "Established company")]
    Established,
    #[serde(rename = "n/a", skip_deserializing)]
    #[strum(serialize = "n/a")]
    Unavailable,
}

/// Industry domain of the consulted company
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
    EnumString, EnumIter, IntoStaticStr,
)]
pub enum Domain {
    #[serde(rename = "Healthcare & wellbeing")]
    #[strum(serialize = "Healthcare & wellbeing")]
    Healthcare,
    #[serde(rename = "Automotive")]
    #[strum(serialize = "Automotive")]
    Automotive,
    #[serde(rename = "Construction")]
    #[strum(serialize = "Construction")]
    Construction,
    #[serde(rename = "Manufacturing")]
    #[strum(serialize = "Manufacturing")]
    Manufacturing,
    #[serde(rename = "Cultural & creative industries")]
    #[strum(serialize = "Cultural & creative industries")]
    Cultural,
    #[serde(rename = "Defense")]
    #[strum(serialize = "Defense")]
    Defense,
    #[serde(rename = "Education & training")]
    #[strum(serialize = "Education & training")]
    Education,
    #[serde(rename = "Environment & sustainability")]
    #[strum(serialize = "Environment & sustainability")]
    Environment,
    #[serde(rename = "Finance")]
    #[strum(serialize = "Finance")]
    Finance,
    #[serde(rename = "Legal")]
    #[strum(serialize = "Legal")]
    Legal,
    #[serde(rename = "Security")]
    #[strum(serialize = "Security")]
    Security,
    #[serde(rename = "Smart cities")]
    #[strum(serialize = "Smart cities")]
    SmartCities,
    #[serde(rename = "Transport, mobility, logistics")]
    #[strum(serialize = "Transport, mobility, logistics")]
    Transport,
    #[serde(rename = "Travel & tourism")]
    #[strum(serialize = "Travel & tourism")]
    Travel,
    #[serde(rename = "Business development/business services")]
    #[strum(serialize = "Business development/business services")]
    Business,
    #[serde(rename = "Real estate & property")]
    #[strum(serialize = "Real estate & property")]
    RealEstate,
    #[serde(rename = "Arts & entertainment")]
    #[strum(serialize = "Arts & entertainment")]
    Arts,
    #[serde(rename = "Other")]
    #[strum(serialize = "Other")]
    Other,
    #[serde(rename = "n/a", skip_deserializing)]
    #[strum(serialize = "n/a")]
    Unavailable,
}

/// Primary AI technique the company uses or plans to use
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
    EnumString, EnumIter, IntoStaticStr,
)]
pub enum AiField {
    #[serde(rename = "Generative AI")]
    #[strum(serialize = "Generative AI")]
    GenerativeAi,
    #[serde(rename = "Machine learning")]
    #[strum(serialize = "Machine learning")]
    MachineLearning,
    #[serde(rename = "Predictive analytics")]
    #[strum(serialize = "Predictive analytics")]
    PredictiveAnalytics,
    #[serde(rename = "Computer vision & image processing")]
    #[strum(serialize = "Computer vision & image processing")]
    ComputerVision,
    #[serde(rename = "Rule-based systems")]
    #[strum(serialize = "Rule-based systems")]
    RuleBased,
    #[serde(rename = "Other")]
    #[strum(serialize = "Other")]
    Other,
    #[serde(rename = "n/a", skip_deserializing)]
    #[strum(serialize = "n/a")]
    Unavailable,
}

/// FAIR services a company can ask for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
    EnumString, EnumIter, IntoStaticStr,
)]
pub enum Service {
    #[serde(rename = "Technical advice")]
    #[strum(serialize = "Technical advice")]
    TechnicalAdvice,
    #[serde(rename = "PoC development")]
    #[strum(serialize = "PoC development")]
    PocDevelopment,
    #[serde(rename = "Data analysis")]
    #[strum(serialize = "Data analysis")]
    DataAnalysis,
    #[serde(rename = "AI roadmap design")]
    #[strum(serialize = "AI roadmap design")]
    AiRoadmap,
    #[serde(rename = "Funding application support")]
    #[strum(serialize = "Funding application support")]
    FundingSupport,
    #[serde(rename = "Student thesis project")]
    #[strum(serialize = "Student thesis project")]
    ThesisSupport,
    #[serde(rename = "Networking support")]
    #[strum(serialize = "Networking support")]
    Networking,
    #[serde(rename = "R&D collaboration")]
    #[strum(serialize = "R&D collaboration")]
    RndCollaboration,
    #[serde(rename = "Data collection")]
    #[strum(serialize = "Data collection")]
    DataCollection,
    #[serde(rename = "Use case design")]
    #[strum(serialize = "Use case design")]
    UseCaseDesign,
    #[serde(rename = "Technical review")]
    #[strum(serialize = "Technical review")]
    TechnicalReview,
    #[serde(rename = "n/a", skip_deserializing)]
    #[strum(serialize = "n/a")]
    Unavailable,
}

/// High-level data categories an AI solution needs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
    EnumString, EnumIter, IntoStaticStr,
)]
pub enum DataType {
    #[serde(rename = "Text data")]
    #[strum(serialize = "Text data")]
    Text,
    #[serde(rename = "Image data")]
    #[strum(serialize = "Image data")]
    Image,
    #[serde(rename = "Video data")]
    #[strum(serialize = "Video data")]
    Video,
    #[serde(rename = "Audio and speech data")]
    #[strum(serialize = "Audio and speech data")]
    Audio,
    #[serde(rename = "Tabular and structured data")]
    #[strum(serialize = "Tabular and structured data")]
    Tabular,
    #[serde(rename = "Electronic health records and medical data")]
    #[strum(serialize = "Electronic health records and medical data")]
    HealthRecords,
    #[serde(rename = "Geospatial and location data")]
    #[strum(serialize = "Geospatial and location data")]
    Geospatial,
    #[serde(rename = "Sensor signals and IoT data")]
    #[strum(serialize = "Sensor signals and IoT data")]
    Sensor,
    #[serde(rename = "Financial and business data")]
    #[strum(serialize = "Financial and business data")]
    Financial,
    #[serde(rename = "Genomics and biological data")]
    #[strum(serialize = "Genomics and biological data")]
    Genomics,
    #[serde(rename = "Engineering drawings and technical data")]
    #[strum(serialize = "Engineering drawings and technical data")]
    Engineering,
    #[serde(rename = "Other data types")]
    #[strum(serialize = "Other data types")]
    Other,
    #[serde(rename = "n/a", skip_deserializing)]
    #[strum(serialize = "n/a")]
    Unavailable,
}

/// Audiences that would benefit from the proposed AI solution
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
    EnumString, EnumIter, IntoStaticStr,
)]
pub enum TargetGroup {
    // Healthcare & medical
    #[serde(rename = "Healthcare professionals")]
    #[strum(serialize = "Healthcare professionals")]
    HealthcareProfessionals,
    #[serde(rename = "Patients and healthcare consumers")]
    #[strum(serialize = "Patients and healthcare consumers")]
    PatientsConsumers,
    #[serde(rename = "Medical researchers")]
    #[strum(serialize = "Medical researchers")]
    MedicalResearchers,
    #[serde(rename = "Pharmaceutical companies")]
    #[strum(serialize = "Pharmaceutical companies")]
    Pharmaceutical,
    #[serde(rename = "Dental professionals")]
    #[strum(serialize = "Dental professionals")]
    DentalProfessionals,
    #[serde(rename = "Psychologists, psychiatrists, and psychotherapists")]
    #[strum(serialize = "Psychologists, psychiatrists, and psychotherapists")]
    MentalHealthProviders,
    #[serde(rename = "Elderly care homes and assisted living providers")]
    #[strum(serialize = "Elderly care homes and assisted living providers")]
    ElderlyCareProviders,
    #[serde(rename = "Functional medicine clinics and specialized healthcare providers")]
    #[strum(serialize = "Functional medicine clinics and specialized healthcare providers")]
    SpecializedMedical,

    // Business & enterprise
    #[serde(rename = "Small and medium businesses")]
    #[strum(serialize = "Small and medium businesses")]
    SmallMediumBusinesses,
    #[serde(rename = "Large enterprise companies and corporations")]
    #[strum(serialize = "Large enterprise companies and corporations")]
    LargeEnterprises,
    #[serde(rename = "Startups and entrepreneurs")]
    #[strum(serialize = "Startups and entrepreneurs")]
    StartupsEntrepreneurs,
    #[serde(rename = "Business analysts, consultants, and advisors")]
    #[strum(serialize = "Business analysts, consultants, and advisors")]
    BusinessProfessionals,

    // Technology & development
    #[serde(rename = "Software developers and tech companies")]
    #[strum(serialize = "Software developers and tech companies")]
    SoftwareDevelopers,
    #[serde(rename = "AI/ML researchers and data scientists")]
    #[strum(serialize = "AI/ML researchers and data scientists")]
    AiMlResearchers,
    #[serde(rename = "IT professionals and system administrators")]
    #[strum(serialize = "IT professionals and system administrators")]
    ItProfessionals,

    // Education & training
    #[serde(rename = "School students")]
    #[strum(serialize = "School students")]
    SchoolStudents,
    #[serde(rename = "College/University students")]
    #[strum(serialize = "College/University students")]
    UniversityStudents,
    #[serde(rename = "Teachers & educational professionals")]
    #[strum(serialize = "Teachers & educational professionals")]
    TeachersEducators,
    #[serde(rename = "Educational institutions & schools")]
    #[strum(serialize = "Educational institutions & schools")]
    EducationalInstitutions,
    #[serde(rename = "Online learning platforms")]
    #[strum(serialize = "Online learning platforms")]
    OnlineLearning,
    #[serde(rename = "Organizations providing employee training and workforce education")]
    #[strum(serialize = "Organizations providing employee training and workforce education")]
    TrainingOrganizations,
    #[serde(rename = "Job seekers")]
    #[strum(serialize = "Job seekers")]
    JobSeekers,

    // Government & public sector
    #[serde(rename = "Government agencies and public sector organizations")]
    #[strum(serialize = "Government agencies and public sector organizations")]
    GovernmentAgencies,
    #[serde(rename = "Municipalities and city governments")]
    #[strum(serialize = "Municipalities and city governments")]
    Municipalities,
    #[serde(rename = "Defense forces and military organizations")]
    #[strum(serialize = "Defense forces and military organizations")]
    DefenseForces,
    #[serde(rename = "Law enforcement & security")]
    #[strum(serialize = "Law enforcement & security")]
    PublicSafety,
    #[serde(rename = "Emergency services")]
    #[strum(serialize = "Emergency services")]
    Emergency,

    // Finance & legal
    #[serde(rename = "Banks & financial institutions")]
    #[strum(serialize = "Banks & financial institutions")]
    FinancialInstitutions,
    #[serde(rename = "Insurance companies")]
    #[strum(serialize = "Insurance companies")]
    Insurance,
    #[serde(rename = "FinTech companies & payment processors")]
    #[strum(serialize = "FinTech companies & payment processors")]
    FintechCompanies,
    #[serde(rename = "Law firms & legal professionals")]
    #[strum(serialize = "Law firms & legal professionals")]
    LegalProfessionals,

    // Construction & real estate
    #[serde(rename = "Construction companies, contractors, and related sectors")]
    #[strum(serialize = "Construction companies, contractors, and related sectors")]
    ConstructionCompanies,
    #[serde(rename = "Architects, engineers, and building designers")]
    #[strum(serialize = "Architects, engineers, and building designers")]
    ArchitectsEngineers,
    #[serde(rename = "Real estate agents, property managers, and investors")]
    #[strum(serialize = "Real estate agents, property managers, and investors")]
    RealEstateProfessionals,
    #[serde(rename = "Property owners, landlords, and facility managers")]
    #[strum(serialize = "Property owners, landlords, and facility managers")]
    PropertyOwners,

    // Manufacturing & industry
    #[serde(rename = "Manufacturing companies and industrial producers")]
    #[strum(serialize = "Manufacturing companies and industrial producers")]
    ManufacturingCompanies,
    #[serde(rename = "Automotive manufacturers and car dealerships")]
    #[strum(serialize = "Automotive manufacturers and car dealerships")]
    AutomotiveCompanies,
    #[serde(rename = "Machine parts vendors and equipment suppliers")]
    #[strum(serialize = "Machine parts vendors and equipment suppliers")]
    MachinePartsVendors,

    // Logistics, retail & services
    #[serde(rename = "Logistics companies and transportation operators")]
    #[strum(serialize = "Logistics companies and transportation operators")]
    LogisticsCompanies,
    #[serde(rename = "Retail companies and e-commerce platforms")]
    #[strum(serialize = "Retail companies and e-commerce platforms")]
    RetailersEcommerce,
    #[serde(rename = "Food brands, producers, and farmers")]
    #[strum(serialize = "Food brands, producers, and farmers")]
    FoodBrandsProducers,
    #[serde(rename = "Customer service and support teams")]
    #[strum(serialize = "Customer service and support teams")]
    CustomerService,

    // Creative & media
    #[serde(rename = "Content creators and digital artists")]
    #[strum(serialize = "Content creators and digital artists")]
    ContentCreators,
    #[serde(rename = "Media companies, streaming services, and entertainment industry")]
    #[strum(serialize = "Media companies, streaming services, and entertainment industry")]
    MediaEntertainment,
    #[serde(rename = "Music schools, teachers, and music professionals")]
    #[strum(serialize = "Music schools, teachers, and music professionals")]
    MusicIndustry,
    #[serde(rename = "Advertising agencies and marketing firms")]
    #[strum(serialize = "Advertising agencies and marketing firms")]
    AdvertisingMarketing,

    // Hospitality & events
    #[serde(rename = "Hospitality industry, venues, and event management")]
    #[strum(serialize = "Hospitality industry, venues, and event management")]
    HospitalityVenues,
    #[serde(rename = "Travel agencies and tourism providers")]
    #[strum(serialize = "Travel agencies and tourism providers")]
    TravelTourism,
    #[serde(rename = "Shopping centers, sports arenas, and entertainment venues")]
    #[strum(serialize = "Shopping centers, sports arenas, and entertainment venues")]
    ShoppingEntertainment,

    // Energy & environment
    #[serde(rename = "Energy companies and utility providers")]
    #[strum(serialize = "Energy companies and utility providers")]
    EnergyUtilities,
    #[serde(rename = "Environmental and sustainability organizations")]
    #[strum(serialize = "Environmental and sustainability organizations")]
    EnvironmentalOrganizations,
    #[serde(rename = "Organizations needing CSRD/ESRS compliance")]
    #[strum(serialize = "Organizations needing CSRD/ESRS compliance")]
    ComplianceOrganizations,

    // Research & development
    #[serde(rename = "Research institutions, think tanks, and inventors")]
    #[strum(serialize = "Research institutions, think tanks, and inventors")]
    ResearchInstitutions,
    #[serde(rename = "Pharmaceutical and biotech companies")]
    #[strum(serialize = "Pharmaceutical and biotech companies")]
    PharmaceuticalBiotech,
    #[serde(rename = "Organizations seeking EU funding and grants")]
    #[strum(serialize = "Organizations seeking EU funding and grants")]
    EuFundingSeekers,

    // Agriculture
    #[serde(rename = "Agriculture, food industry, and farmers")]
    #[strum(serialize = "Agriculture, food industry, and farmers")]
    AgricultureFood,

    // Specialized services
    #[serde(rename = "Immigration authorities, migrants, and employers")]
    #[strum(serialize = "Immigration authorities, migrants, and employers")]
    ImmigrationServices,
    #[serde(rename = "Recruiters, HR departments, and employment services")]
    #[strum(serialize = "Recruiters, HR departments, and employment services")]
    RecruitingHr,
    #[serde(rename = "Fitness trainers and wellness coaches")]
    #[strum(serialize = "Fitness trainers and wellness coaches")]
    FitnessWellness,

    // General users
    #[serde(rename = "General consumers and public users")]
    #[strum(serialize = "General consumers and public users")]
    GeneralConsumers,
    #[serde(rename = "Senior executives and C-level leaders")]
    #[strum(serialize = "Senior executives and C-level leaders")]
    SeniorExecutives,
    #[serde(rename = "Knowledge workers and professionals")]
    #[strum(serialize = "Knowledge workers and professionals")]
    KnowledgeWorkers,

    // Sports & gaming
    #[serde(rename = "Sport professionals")]
    #[strum(serialize = "Sport professionals")]
    Sports,
    #[serde(rename = "Gaming companies, game programmers")]
    #[strum(serialize = "Gaming companies, game programmers")]
    Gaming,

    #[serde(rename = "Other target groups not specified above")]
    #[strum(serialize = "Other target groups not specified above")]
    Other,
    #[serde(rename = "n/a", skip_deserializing)]
    #[strum(serialize = "n/a")]
    Unavailable,
}

impl Category for ConsultationType {}
impl Category for MaturityLevel {}
impl Category for CompanyType {}
impl Category for Domain {}
impl Category for AiField {}
impl Category for Service {}
impl Category for DataType {}
impl Category for TargetGroup {}
