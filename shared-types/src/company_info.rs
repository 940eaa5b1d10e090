use crate::category::{
    AiField, CompanyType, ConsultationType, DataType, Domain, MaturityLevel, Service, TargetGroup,
    NOT_AVAILABLE,
};
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Experts placeholder used by the fallback record
pub const UNKNOWN_EXPERTS: &str = "Unknown";

/// Domain classification information for the company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyDomain {
    /// The primary industry domain the company belongs to. Choose ONE from:
    ///
    /// - Healthcare & wellbeing: Medical, healthcare, wellness, fitness, health services,
    ///   diagnostics, devices, mental health
    ///
    /// - Automotive: Car manufacturers, parts suppliers, automotive software, autonomous
    ///   vehicles
    ///
    /// - Construction: Building construction, architecture, civil engineering, construction
    ///   materials, planning
    ///
    /// - Manufacturing: Physical goods production, industrial production, factories,
    ///   automation
    ///
    /// - Cultural & creative industries: Design, publishing, media production, art, cultural
    ///   heritage, creative content
    ///
    /// - Defense: Military, defense technologies, security forces, governmental defense
    ///
    /// - Education & training: Educational services, training, e-learning platforms,
    ///   educational content, academic tools
    ///
    /// - Environment & sustainability: Environmental protection, sustainability, renewable
    ///   energy, conservation, climate monitoring
    ///
    /// - Finance: Banking, insurance, fintech, investment, accounting, financial services
    ///
    /// - Legal: Legal services, legal tech, compliance tools, regulatory assistance
    ///
    /// - Security: Cybersecurity, physical security, surveillance, identity verification,
    ///   threat detection
    ///
    /// - Smart cities: Urban infrastructure technologies, city planning, urban monitoring,
    ///   smart city initiatives
    ///
    /// - Transport, mobility, logistics: Transportation services, logistics, supply chain,
    ///   shipping, freight, mobility
    ///
    /// - Travel & tourism: Travel industry, tourism, hospitality, booking services, travel
    ///   planning
    ///
    /// - Business development/business services: B2B services, consulting, business
    ///   optimization, productivity tools
    ///
    /// - Real estate & property: Property management, real estate services, property
    ///   development, facility management
    ///
    /// - Arts & entertainment: Entertainment, media, gaming, arts, leisure sectors
    ///
    /// - Other: Companies that don't clearly fit into any of the above categories
    pub domain: Domain,
}

/// AI field classification information for the company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyAiField {
    /// The primary AI field the company is using or planning to use. Choose ONE from:
    ///
    /// - Generative AI: Content generation (text, images, audio, code), large language models,
    ///   retrieval augment generation, chatbots, text-to-speech, speech-to-text, model context
    ///   protocol, AI agents
    ///
    /// - Machine learning: Traditional ML algorithms, neural networks, deep learning,
    ///   clustering, classification, pattern recognition
    ///
    /// - Predictive analytics: Statistical algorithms for forecasting, trend analysis,
    ///   predictive modeling based on historical data
    ///
    /// - Computer vision & image processing: Image processing, image recognition, object
    ///   detection, object tracking, facial recognition, image segmentation, image description
    ///   or labeling, video analysis, eye-tracking
    ///
    /// - Rule-based systems: Predefined rules, logic, knowledge bases, expert systems,
    ///   decision trees, rule-based reasoning
    ///
    /// - Other: AI field that doesn't clearly fit into any of the above categories
    pub ai_field: AiField,
}

/// Target market of the proposed solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyTargetGroup {
    /// The target groups that would most benefit from the AI solution. Choose one or more from:
    ///
    /// - Healthcare professionals: Medical practitioners, clinical staff, healthcare
    ///   facilities
    ///
    /// - Patients and healthcare consumers: End users of healthcare services, health-conscious
    ///   consumers, chronic disease patients
    ///
    /// - Medical researchers: Research scientists, drug developers, clinical researchers
    ///
    /// - Pharmaceutical companies: Pharmaceutical companies
    ///
    /// - Dental professionals: Dental professionals and oral healthcare providers
    ///
    /// - Psychologists, psychiatrists, and psychotherapists: Mental health professionals and
    ///   therapy providers
    ///
    /// - Elderly care homes and assisted living providers: Senior care facilities and
    ///   eldercare professionals
    ///
    /// - Functional medicine clinics and specialized healthcare providers: Alternative and
    ///   specialized medical practitioners
    ///
    /// - Small and medium businesses: Small business owners, medium-sized companies,
    ///   entrepreneurial ventures
    ///
    /// - Large enterprise companies and corporations: Fortune 500 companies, multinational
    ///   corporations, large organizations
    ///
    /// - Startups and entrepreneurs: New business ventures, startup founders, entrepreneurial
    ///   companies
    ///
    /// - Business analysts, consultants, and advisors: Management consultants, business
    ///   strategy advisors, professional services
    ///
    /// - Software developers and tech companies: Programming professionals, technology
    ///   companies, software development firms
    ///
    /// - AI/ML researchers and data scientists: Artificial intelligence researchers, machine
    ///   learning specialists, data professionals
    ///
    /// - IT professionals and system administrators: Information technology specialists,
    ///   system administrators, IT support
    ///
    /// - School students: K-12, basic or elementary school students.
    ///
    /// - College/University students: Students of higher educational institutes
    ///
    /// - Job seekers: People seeking jobs
    ///
    /// - Teachers & educational professionals: Educators, instructors, academic staff,
    ///   educational administrators
    ///
    /// - Educational institutions & schools: Schools, universities, colleges
    ///
    /// - Online learning platforms: Online learning platforms
    ///
    /// - Organizations providing employee training and workforce education: Corporate
    ///   training, professional development providers
    ///
    /// - Government agencies and public sector organizations: Federal agencies, state
    ///   governments, public sector
    ///
    /// - Municipalities and city governments: Local government officials, municipal
    ///   administrators, city planners
    ///
    /// - Defense forces and military organizations: Armed forces, military personnel, defense
    ///   contractors
    ///
    /// - Law enforcement & security: Police, cybersecurity, security companies
    ///
    /// - Emergency services: Public emergency responders
    ///
    /// - Banks & financial institutions: Traditional banks and credit unions
    ///
    /// - Insurance companies: insurance companies
    ///
    /// - FinTech companies & payment processors: Financial technology startups, digital
    ///   payment companies
    ///
    /// - Law firms & legal professionals: Legal service providers, attorneys, corporate legal
    ///   departments
    ///
    /// - Construction companies, contractors, and related sectors: Building contractors,
    ///   construction firms, construction industry
    ///
    /// - Architects, engineers, and building designers: Building designers, structural
    ///   engineers, construction planners
    ///
    /// - Real estate agents, property managers, and investors: Property sales professionals,
    ///   property management, real estate investment
    ///
    /// - Property owners, landlords, and facility managers: Building owners, rental property
    ///   managers, facility operators
    ///
    /// - Manufacturing companies and industrial producers: Factory owners, industrial
    ///   manufacturers, production companies
    ///
    /// - Automotive manufacturers and car dealerships: Car manufacturers, vehicle producers,
    ///   automotive sales
    ///
    /// - Machine parts vendors and equipment suppliers: Industrial equipment suppliers,
    ///   machinery vendors
    ///
    /// - Logistics companies and transportation operators: Freight companies, shipping
    ///   services, transportation providers
    ///
    /// - Retail companies and e-commerce platforms: Physical retail stores, online retailers,
    ///   digital marketplaces
    ///
    /// - Food brands, producers, and farmers: Food manufacturers, agricultural producers, food
    ///   industry
    ///
    /// - Customer service and support teams: Customer support professionals, service
    ///   representatives, help desk teams
    ///
    /// - Content creators and digital artists: YouTubers, bloggers, digital designers,
    ///   creative professionals
    ///
    /// - Media companies, streaming services, and entertainment industry: TV, radio, film,
    ///   gaming, streaming platforms
    ///
    /// - Music schools, teachers, and music professionals: Music education, music industry
    ///   professionals, music fans
    ///
    /// - Advertising agencies and marketing firms: Ad agencies, marketing professionals, brand
    ///   managers
    ///
    /// - Hospitality industry, venues, and event management: Hotels, restaurants, event
    ///   organizers, venue operators
    ///
    /// - Travel agencies and tourism providers: Travel service providers, tourism industry,
    ///   hospitality providers
    ///
    /// - Shopping centers, sports arenas, and entertainment venues: Entertainment facilities,
    ///   retail venues, sports organizations
    ///
    /// - Energy companies and utility providers: Electric utilities, power generation,
    ///   renewable energy companies
    ///
    /// - Environmental and sustainability organizations: Conservation groups, environmental
    ///   agencies, green tech companies
    ///
    /// - Organizations needing CSRD/ESRS compliance: Companies requiring sustainability
    ///   reporting and compliance
    ///
    /// - Research institutions, think tanks, and inventors: Academic research organizations,
    ///   policy research, innovation labs
    ///
    /// - Pharmaceutical and biotech companies: Drug development companies, biotechnology
    ///   firms, medical research
    ///
    /// - Organizations seeking EU funding and grants: Grant applicants, research funding
    ///   seekers, EU project participants
    ///
    /// - Agriculture, food industry, and farmers: Agricultural workers, food production,
    ///   farming communities
    ///
    /// - Immigration authorities, migrants, and employers: Immigration services, migrant
    ///   support, international employment
    ///
    /// - Recruiters, HR departments, and employment services: Human resources, talent
    ///   acquisition, employment agencies
    ///
    /// - Fitness trainers and wellness coaches: Personal trainers, wellness professionals,
    ///   fitness industry workers
    ///
    /// - General consumers and public users: Everyday consumers, general public, end-user
    ///   consumers
    ///
    /// - Senior executives and C-level leaders: CEOs, executive leadership, senior management
    ///   professionals
    ///
    /// - Knowledge workers and professionals: Professional workers, office workers, skilled
    ///   professionals
    ///
    /// - Sport professionals: Sportsmen, game players, gaming institutes
    ///
    /// - Gaming companies, game programmers: Gaming companies, game programmers
    ///
    /// - Other target groups not specified above: Target groups that don't clearly fit into
    ///   any of the above categories
    ///
    /// Return as a list of target groups, for example: ["Healthcare professionals",
    /// "Patients and healthcare consumers"] or ["Job seekers"].
    pub target_group: Vec<TargetGroup>,
}

/// Data needed for the intended AI integration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DataRequirements {
    /// The types of data required for the AI solution. Choose one or more relevant data
    /// types from:
    ///
    /// - Text data: Text documents, reports, scientific papers, legal contracts, patient
    ///   notes, therapy transcripts, regulatory documents, user comments, CVs, job
    ///   descriptions, and any textual content
    ///
    /// - Image data: Medical images (X-rays, CT scans, MRIs, ultrasounds), photographs, facial
    ///   images, dental images, cellular imaging, engineering drawings, building drawings, 2D
    ///   technical diagrams, and any visual content
    ///
    /// - Video data: Video recordings, annotated video feeds, multimedia content, video data
    ///   with audio tracks, training videos, and any moving visual content
    ///
    /// - Audio and speech data: Speech recordings, audio data, voice transcripts, audio
    ///   tracks, heartbeat sounds, lung sounds, and any audio content
    ///
    /// - Tabular and structured data: Spreadsheets, databases, numerical data, statistical
    ///   data, laboratory results, demographic data, metadata, activity data from devices, and
    ///   structured datasets
    ///
    /// - Electronic health records and medical data: Patient records, medical history,
    ///   treatment data, clinical data, health metrics, physiological signals (ECG, vital
    ///   signs), medical device data, and healthcare-specific information
    ///
    /// - Geospatial and location data: GPS coordinates, location metadata, geographical
    ///   information, mapping data, spatial coordinates, and location-based information
    ///
    /// - Sensor signals and IoT data: Sensor measurements, IoT device signals, physiological
    ///   monitoring data, environmental sensors, smart device data, and automated data
    ///   collection
    ///
    /// - Financial and business data: Accounting data, financial records, business operations
    ///   data, tendering information, procurement data, and business metrics
    ///
    /// - Genomics and biological data: DNA sequences, genetic information, biological samples,
    ///   genomics data, and biological research data
    ///
    /// - Engineering drawings and technical data: CAD drawings, technical blueprints, 3D point
    ///   cloud data, architectural plans, engineering specifications, and technical
    ///   documentation
    ///
    /// - Other data types: Data types that don't clearly fit into any of the above categories
    ///
    /// Return as a list of data types, for example: ["Text data", "Image data"] or
    /// ["Audio and speech data"].
    pub data_type: Vec<DataType>,
}

/// FAIR services sought by the company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServicesDescriptions {
    /// The services sought by the company. Choose one or more relevant services from:
    ///
    /// - Technical advice: Services related to algorithmic design, model selection, training,
    ///   testing, deployment, or other technical aspects
    ///
    /// - PoC development: Support in developing proof of concept
    ///
    /// - Data analysis: Support in analyzing data and getting insights from it.
    ///
    /// - AI roadmap design: Support in designing a concrete AI strategy or roadmap
    ///
    /// - Funding application support: Support in applying for funding
    ///
    /// - Student thesis project: Developing a prototype or proof of concept through a student
    ///   thesis project (master thesis).
    ///
    /// - Networking support: Connecting with other companies for collaboration
    ///
    /// - R&D collaboration: Partnering in R&D and co-research or co-development projects
    ///
    /// - Data collection: Support in collecting data for training AI models
    ///
    /// - Use case design: Support in understanding AI integration and use case design.
    ///   Required by companies which do not know which use-case is suitable for their business
    ///   needs.
    ///
    /// - Technical review: Technical review of the existing AI solution or product
    ///
    /// Return as a list of services, for example: ["Technical advice", "PoC development"]
    /// or ["AI roadmap design"].
    pub services: Vec<Service>,
}

/// Company information extracted from one consultancy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyInfo {
    /// The name of the company
    pub company_name: String,

    /// Country where the company is located or headquartered
    pub country: String,

    /// Date of the consultation or report in dd-mm-yyyy format (e.g., 15-03-2024)
    pub consultation_date: String,

    /// Names of the persons providing AI consultancy. If multiple experts,
    /// separate them with commas.
    pub experts: String,

    /// Type of consultation, either 'Regular' or 'Pop-up'. This must be
    /// explicitly mentioned in the document.
    pub consultation_type: ConsultationType,

    /// Domain classification information for the company
    pub domain_info: CompanyDomain,

    /// AI field classification information for the company
    pub ai_field_info: CompanyAiField,

    /// Brief description (one phrase not exceeding a few words) of the
    /// company's proposed or intended AI solution. Examples: 'AI-based healthcare
    /// app for lifestyle recommendations', 'AI-based language learning platform',
    /// 'Computer vision system for quality control'.
    pub intended_solution: String,

    /// Company's AI maturity level: Low, Moderate, or High
    pub ai_maturity_level: MaturityLevel,

    /// Company's technical expertise and capability level: Low, Moderate, or High
    pub technical_expertise: MaturityLevel,

    /// Type of company, either 'Startup' or 'Established company'
    pub company_type: CompanyType,

    /// Identified target market or customers. Select one or more relevant
    /// target groups.
    pub target_market: CompanyTargetGroup,

    /// Type and format of data required for the intended AI integration.
    /// Select one or more relevant data types.
    pub data_requirements: DataRequirements,

    /// Services expected by the company. Select one or more relevant services.
    pub fair_services_sought: ServicesDescriptions,

    /// Very brief summary of key recommendations focusing on the most important
    /// suggested actions. If multiple points, separate them with semicolons. Keep
    /// it concise and actionable. Each action point should be a very brief phrase.
    pub recommendations: String,
}

impl CompanyInfo {
    /// Record used whenever a document could not be extracted
    pub fn fallback() -> Self {
        Self {
            company_name: NOT_AVAILABLE.to_string(),
            country: NOT_AVAILABLE.to_string(),
            consultation_date: NOT_AVAILABLE.to_string(),
            experts: UNKNOWN_EXPERTS.to_string(),
            consultation_type: ConsultationType::Unavailable,
            domain_info: CompanyDomain {
                domain: Domain::Unavailable,
            },
            ai_field_info: CompanyAiField {
                ai_field: AiField::Unavailable,
            },
            intended_solution: NOT_AVAILABLE.to_string(),
            ai_maturity_level: MaturityLevel::Unavailable,
            technical_expertise: MaturityLevel::Unavailable,
            company_type: CompanyType::Unavailable,
            target_market: CompanyTargetGroup {
                target_group: vec![TargetGroup::Unavailable],
            },
            data_requirements: DataRequirements {
                data_type: vec![DataType::Unavailable],
            },
            fair_services_sought: ServicesDescriptions {
                services: vec![Service::Unavailable],
            },
            recommendations: NOT_AVAILABLE.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    /// Returns the record with `company_name` replaced when it is blank
    pub fn with_company_name_or(self, fallback_name: &str) -> Self {
        if self.company_name.trim().is_empty() {
            Self {
                company_name: fallback_name.to_string(),
                ..self
            }
        } else {
            self
        }
    }

    /// JSON schema bound to the remote extraction agent.
    ///
    /// Subschemas are inlined since the service does not resolve `$ref`.
    pub fn json_schema() -> Result<serde_json::Value, serde_json::Error> {
        let generator = SchemaSettings::draft07()
            .with(|settings| settings.inline_subschemas = true)
            .into_generator();
        let schema = generator.into_root_schema_for::<CompanyInfo>();
        serde_json::to_value(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "company_name": "Acme Robotics",
            "country": "Austria",
            "consultation_date": "15-03-2024",
            "experts": "Jane Roe, John Doe",
            "consultation_type": "Regular",
            "domain_info": { "domain": "Manufacturing" },
            "ai_field_info": { "ai_field": "Computer vision & image processing" },
            "intended_solution": "Visual quality control",
            "ai_maturity_level": "Low",
            "technical_expertise": "Moderate",
            "company_type": "Startup",
            "target_market": { "target_group": ["Manufacturing companies and industrial producers"] },
            "data_requirements": { "data_type": ["Image data", "Video data"] },
            "fair_services_sought": { "services": ["Technical advice", "PoC development"] },
            "recommendations": "Collect labelled images; build a PoC"
        })
    }

    #[test]
    fn test_deserialize_company_info() {
        let info: CompanyInfo = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(info.company_name, "Acme Robotics");
        assert_eq!(info.domain_info.domain, Domain::Manufacturing);
        assert_eq!(
            info.data_requirements.data_type,
            vec![DataType::Image, DataType::Video]
        );
        assert_eq!(info.company_type, CompanyType::Startup);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("recommendations");
        assert!(serde_json::from_value::<CompanyInfo>(value).is_err());
    }

    #[test]
    fn test_fallback_shape() {
        let info = CompanyInfo::fallback();
        assert_eq!(info.company_name, "n/a");
        assert_eq!(info.country, "n/a");
        assert_eq!(info.consultation_date, "n/a");
        assert_eq!(info.experts, "Unknown");
        assert_eq!(info.domain_info.domain, Domain::Unavailable);
        assert_eq!(info.fair_services_sought.services, vec![Service::Unavailable]);
        assert!(info.is_fallback());

        let serialized = serde_json::to_value(&info).unwrap();
        assert_eq!(serialized["consultation_type"], "n/a");
        assert_eq!(serialized["target_market"]["target_group"], json!(["n/a"]));
    }

    #[test]
    fn test_with_company_name_or() {
        let info: CompanyInfo = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(
            info.clone().with_company_name_or("report").company_name,
            "Acme Robotics"
        );

        let blank = CompanyInfo {
            company_name: "   ".to_string(),
            ..info
        };
        assert_eq!(blank.with_company_name_or("report").company_name, "report");
    }

    #[test]
    fn test_json_schema_lists_labels_without_placeholder() {
        let schema = CompanyInfo::json_schema().unwrap();
        let rendered = schema.to_string();

        assert!(rendered.contains("Healthcare & wellbeing"));
        assert!(rendered.contains("Established company"));
        assert!(rendered.contains("Other target groups not specified above"));
        assert!(!rendered.contains("\"n/a\""));
        assert!(!rendered.contains("$ref"));

        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 15);
    }

    #[test]
    fn test_json_schema_carries_category_guidance() {
        let schema = CompanyInfo::json_schema().unwrap();
        let properties = &schema["properties"];

        let domain = properties["domain_info"]["properties"]["domain"]["description"]
            .as_str()
            .unwrap();
        assert!(domain.contains("Healthcare & wellbeing: Medical, healthcare, wellness"));
        assert!(domain.contains("Other: Companies that don't clearly fit"));

        let ai_field = properties["ai_field_info"]["properties"]["ai_field"]["description"]
            .as_str()
            .unwrap();
        assert!(ai_field.contains("Rule-based systems: Predefined rules"));

        let target_group =
            properties["target_market"]["properties"]["target_group"]["description"]
                .as_str()
                .unwrap();
        assert!(target_group.contains("Job seekers: People seeking jobs"));
        assert!(target_group.contains("Sport professionals: Sportsmen"));

        let data_type =
            properties["data_requirements"]["properties"]["data_type"]["description"]
                .as_str()
                .unwrap();
        assert!(data_type.contains("Geospatial and location data: GPS coordinates"));

        let services =
            properties["fair_services_sought"]["properties"]["services"]["description"]
                .as_str()
                .unwrap();
        assert!(services.contains("Use case design: Support in understanding AI integration"));
        assert!(services.contains("R&D collaboration: Partnering"));

        // one paragraph per category keeps the guidance readable remotely
        assert!(data_type.contains("\n\n- Image data: "));
    }
}
