//! Extractors Crate
//!
//! Turns payloads returned by the remote extraction service into validated
//! [`CompanyInfo`](shared_types::CompanyInfo) records, and writes those records
//! out as a table.
//!
//! # Pipeline
//!
//! - `normalize`: best-effort cleanup of a loosely-typed JSON payload
//! - `record`: schema validation into a `CompanyInfo`
//! - `export`: flat row projection and spreadsheet/CSV writers
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{build_record, export, normalize};
//!
//! let info = build_record(normalize(raw, "acme_consultation"))?;
//! let table = export(&[info], Path::new("output/analysis.xlsx"))?;
//! ```

pub mod export;
pub mod normalize;
pub mod record;

pub use export::{export, CompanyRow, ExportError, OutputFormat, Table, TableWriter, COLUMNS};
pub use normalize::normalize;
pub use record::{build_record, RecordError};
