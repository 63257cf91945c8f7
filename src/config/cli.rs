use crate::config::toml_config::TomlConfig;
use crate::config::ReaderConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tarot-reader")]
#[command(about = "Tarot reading API backed by an OpenAI-compatible chat completion service")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "3000")]
    pub port: u16,

    #[arg(long, help = "Optional TOML config file (the API key is always read from OPENAI_API_KEY)")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub temperature: Option<f64>,

    #[arg(long, help = "Disable CORS headers and the OPTIONS preflight reply")]
    pub no_cors: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn reader_config(&self) -> Result<ReaderConfig> {
        self.reader_config_with(|key| std::env::var(key).ok())
    }

    /// 命令列參數優先於環境變數與設定檔
    pub fn reader_config_with<F>(&self, lookup: F) -> Result<ReaderConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let mut config = ReaderConfig::layered(file.as_ref(), lookup)?;

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if self.no_cors {
            config.cors_enabled = false;
        }

        Ok(config)
    }
}
