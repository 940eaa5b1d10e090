mod csv_writer;
mod xlsx;

pub use csv_writer::CsvWriter;
pub use xlsx::XlsxWriter;

use shared_types::{join_labels, Category, CompanyInfo};
use std::path::Path;

/// Column headers, in export order
pub const COLUMNS: [&str; 15] = [
    "Company Name",
    "Country",
    "Consultation Date",
    "Experts",
    "Consultation Type",
    "Domain",
    "AI Field",
    "Intended Solution",
    "AI Maturity Level",
    "Technical Expertise",
    "Company Type",
    "Target Market",
    "Data Requirements",
    "FAIR Services Sought",
    "Recommendations",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Flat projection of one record, one display string per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRow {
    pub company_name: String,
    pub country: String,
    pub consultation_date: String,
    pub experts: String,
    pub consultation_type: String,
    pub domain: String,
    pub ai_field: String,
    pub intended_solution: String,
    pub ai_maturity_level: String,
    pub technical_expertise: String,
    pub company_type: String,
    pub target_market: String,
    pub data_requirements: String,
    pub fair_services_sought: String,
    pub recommendations: String,
}

impl CompanyRow {
    /// Cell values in [`COLUMNS`] order
    pub fn values(&self) -> [&str; 15] {
        [
            &self.company_name,
            &self.country,
            &self.consultation_date,
            &self.experts,
            &self.consultation_type,
            &self.domain,
            &self.ai_field,
            &self.intended_solution,
            &self.ai_maturity_level,
            &self.technical_expertise,
            &self.company_type,
            &self.target_market,
            &self.data_requirements,
            &self.fair_services_sought,
            &self.recommendations,
        ]
    }
}

impl From<&CompanyInfo> for CompanyRow {
    fn from(info: &CompanyInfo) -> Self {
        Self {
            company_name: info.company_name.clone(),
            country: info.country.clone(),
            consultation_date: info.consultation_date.clone(),
            experts: info.experts.clone(),
            consultation_type: info.consultation_type.label().to_string(),
            domain: info.domain_info.domain.label().to_string(),
            ai_field: info.ai_field_info.ai_field.label().to_string(),
            intended_solution: info.intended_solution.clone(),
            ai_maturity_level: info.ai_maturity_level.label().to_string(),
            technical_expertise: info.technical_expertise.label().to_string(),
            company_type: info.company_type.label().to_string(),
            target_market: join_labels(&info.target_market.target_group),
            data_requirements: join_labels(&info.data_requirements.data_type),
            fair_services_sought: join_labels(&info.fair_services_sought.services),
            recommendations: info.recommendations.clone(),
        }
    }
}

/// In-memory result table, one row per processed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<CompanyRow>,
}

impl Table {
    pub fn from_records(records: &[CompanyInfo]) -> Self {
        Self {
            rows: records.iter().map(CompanyRow::from).collect(),
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Output file formats, chosen from the output path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            _ => Err(ExportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Writes a [`Table`] to a file
pub trait TableWriter {
    fn write(&self, table: &Table, output_path: &Path) -> Result<(), ExportError>;
}

/// Projects the records into a table and writes it to `output_path`.
///
/// The format follows the file extension. The table is returned for reporting.
pub fn export(records: &[CompanyInfo], output_path: &Path) -> Result<Table, ExportError> {
    let format = OutputFormat::from_path(output_path)?;
    let table = Table::from_records(records);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    tracing::info!(
        "Saving {} rows to {}",
        table.len(),
        output_path.display()
    );

    match format {
        OutputFormat::Xlsx => XlsxWriter::default().write(&table, output_path)?,
        OutputFormat::Csv => CsvWriter::new().write(&table, output_path)?,
    }

    Ok(table)
}
