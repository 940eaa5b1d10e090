use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use consult_agents::config::API_KEY_ENV;
use consult_agents::{process_documents, AppConfig, CompanyExtractor, LlamaCloudClient};
use extractors::OutputFormat;
use shared_types::CompanyInfo;

#[derive(Parser, Debug)]
#[command(
    name = "company-extractor",
    about = "Extract company information from consultation documents into a spreadsheet"
)]
struct Cli {
    /// Directory holding the consultation documents
    #[arg(long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// Output file, .xlsx or .csv
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Extension of the documents to process
    #[arg(long)]
    extension: Option<String>,

    /// Name of the remote extraction agent
    #[arg(long)]
    agent_name: Option<String>,

    /// Config file, defaults to the per-user config location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file_path.as_deref());

    let (config, config_path) =
        AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    let api_key = config
        .llama_cloud
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing llama_cloud.api_key in config at {:?} (or set {})",
                config_path,
                API_KEY_ENV
            )
        })?;

    let input_dir = cli.input.unwrap_or(config.pipeline.input_dir);
    let output_path = cli.output.unwrap_or(config.pipeline.output_path);
    let extension = cli.extension.unwrap_or(config.pipeline.extension);
    let agent_name = cli.agent_name.unwrap_or(config.pipeline.agent_name);

    OutputFormat::from_path(&output_path)?;

    let client = LlamaCloudClient::new(api_key, &config.llama_cloud)
        .context("Failed to create extraction service client")?;

    println!("Consultation document analysis");
    println!("===============================");
    println!("Input:  {}", input_dir.display());
    println!("Output: {}", output_path.display());
    println!("Agent:  {}", agent_name);

    let schema = CompanyInfo::json_schema().context("Failed to build extraction schema")?;
    let extractor = CompanyExtractor::new(Arc::new(client), agent_name, schema);

    let records = process_documents(&extractor, &input_dir, &extension).await?;
    let table = extractors::export(&records, &output_path)
        .with_context(|| format!("Failed to write results to {:?}", output_path))?;

    let fallbacks = records.iter().filter(|info| info.is_fallback()).count();

    println!();
    println!("Processed {} documents", table.len());
    if fallbacks > 0 {
        println!("{} documents could not be extracted and use default values", fallbacks);
    }
    println!("Results saved to {}", output_path.display());

    Ok(())
}

fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("company-extractor.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init();
    }
}
