use shared_types::CompanyInfo;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Write the extraction schema so it can be reviewed or uploaded by hand
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("schema/company_info.schema.json"));

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let schema = CompanyInfo::json_schema()?;
    let output = serde_json::to_string_pretty(&schema)?;

    fs::write(&output_path, format!("{}\n", output))?;
    println!("Generated extraction schema in {}", output_path.display());

    Ok(())
}
