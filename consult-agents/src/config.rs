use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_AGENT_NAME: &str = "company-info-extractor";
pub const US_BASE_URL: &str = "https://api.cloud.llamaindex.ai";
pub const EU_BASE_URL: &str = "https://api.cloud.eu.llamaindex.ai";

/// Environment variable checked when no key is configured
pub const API_KEY_ENV: &str = "LLAMA_CLOUD_API_KEY";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub llama_cloud: LlamaCloudConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    #[default]
    Eu,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LlamaCloudConfig {
    pub api_key: Option<String>,
    pub region: Region,
    pub base_url: Option<String>,
    pub project_id: Option<String>,
    pub extraction_mode: String,
    pub poll_interval_ms: u64,
    /// 0 means wait for the job as long as it takes
    pub max_polls: u32,
}

impl Default for LlamaCloudConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            region: Region::Eu,
            base_url: None,
            project_id: None,
            extraction_mode: "BALANCED".to_string(),
            poll_interval_ms: 2000,
            max_polls: 0,
        }
    }
}

impl LlamaCloudConfig {
    /// Explicit `base_url` wins over the region default
    pub fn resolved_base_url(&self) -> String {
        let base = match (&self.base_url, self.region) {
            (Some(url), _) if !url.trim().is_empty() => url.trim(),
            (_, Region::Eu) => EU_BASE_URL,
            (_, Region::Us) => US_BASE_URL,
        };
        base.trim_end_matches('/').to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct PipelineConfig {
    pub agent_name: String,
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub extension: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            agent_name: DEFAULT_AGENT_NAME.to_string(),
            input_dir: PathBuf::from("input"),
            output_path: PathBuf::from("output").join("company_analysis_llama_extract.xlsx"),
            extension: "docx".to_string(),
        }
    }
}

const DEFAULT_CONFIG: &str = r#"
[llama_cloud]
# api_key = "llx-..."
# region = "us"
# base_url = "https://api.cloud.eu.llamaindex.ai"
# project_id = "..."
poll_interval_ms = 2000

[pipeline]
agent_name = "company-info-extractor"
input_dir = "input"
output_path = "output/company_analysis_llama_extract.xlsx"
extension = "docx"
"#;

impl AppConfig {
    /// Loads the config file, then applies `CONSULT_*` environment overrides.
    ///
    /// Without an explicit path the default location is used, and a commented
    /// template is written there on first use.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let config_path = get_config_path();
                write_default_config(&config_path)?;
                config_path
            }
        };

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .add_source(
                Environment::with_prefix("CONSULT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut config: AppConfig = builder.try_deserialize()?;

        if config.llama_cloud.api_key.is_none() {
            config.llama_cloud.api_key = std::env::var(API_KEY_ENV).ok();
        }

        Ok((config, config_path))
    }
}

fn write_default_config(config_path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    if !config_path.exists() {
        std::fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
            ConfigError::Message(format!("Failed to write default config: {e}"))
        })?;
    }

    Ok(())
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("consult-extract").join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}
