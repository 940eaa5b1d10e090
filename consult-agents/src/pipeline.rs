//! Batch driver: enumerate the input documents and extract each in turn

use crate::company_extractor::CompanyExtractor;
use anyhow::{Context, Result};
use extractors::{CompanyRow, COLUMNS};
use shared_types::CompanyInfo;
use std::path::{Path, PathBuf};

/// Lists the files in `input_dir` whose extension matches `extension`,
/// ignoring case, sorted by path. The directory is created if missing.
pub fn list_documents(input_dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(input_dir)?;

    let wanted = extension.trim_start_matches('.');
    let mut documents = Vec::new();

    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case(wanted));
        if matches {
            documents.push(path);
        }
    }

    documents.sort();
    Ok(documents)
}

/// Extracts every matching document in `input_dir`, one record per file in
/// listing order. Per-file failures become fallback records and never stop
/// the batch.
pub async fn process_documents(
    extractor: &CompanyExtractor,
    input_dir: &Path,
    extension: &str,
) -> Result<Vec<CompanyInfo>> {
    let documents = list_documents(input_dir, extension)
        .with_context(|| format!("Failed to list documents in {:?}", input_dir))?;

    if documents.is_empty() {
        tracing::warn!(
            "No .{} files found in {}",
            extension.trim_start_matches('.'),
            input_dir.display()
        );
        return Ok(Vec::new());
    }

    tracing::info!("Found {} documents to process", documents.len());

    let mut records = Vec::with_capacity(documents.len());
    for (index, path) in documents.iter().enumerate() {
        tracing::info!(
            "Processing document {}/{}: {}",
            index + 1,
            documents.len(),
            path.display()
        );

        let info = extractor.extract(path).await;
        log_summary(&info);
        records.push(info);
    }

    Ok(records)
}

/// Field-by-field summary of one record, in export column order
fn summary_lines(info: &CompanyInfo) -> Vec<String> {
    let row = CompanyRow::from(info);
    COLUMNS
        .iter()
        .zip(row.values())
        .map(|(column, value)| format!("{column}: {value}"))
        .collect()
}

fn log_summary(info: &CompanyInfo) {
    tracing::info!("Extracted information:");
    for line in summary_lines(info) {
        tracing::info!("{}", line);
    }
}
