use crate::config::ReaderConfig;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 選用的 TOML 設定檔。API 金鑰不放在檔案裡，只從環境變數讀。
///
/// ```toml
/// [openai]
/// base_url = "https://api.openai.com/v1"
/// model = "gpt-3.5-turbo"
/// temperature = 0.7
///
/// [http]
/// cors = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub openai: OpenAiSection,
    #[serde(default)]
    pub http: HttpSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAiSection {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpSection {
    pub cors: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded config file: {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 只覆寫檔案裡有寫的欄位
    pub fn apply_to(&self, config: &mut ReaderConfig) {
        if let Some(base_url) = &self.openai.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(model) = &self.openai.model {
            config.model = model.clone();
        }
        if let Some(temperature) = self.openai.temperature {
            config.temperature = temperature;
        }
        if let Some(cors) = self.http.cors {
            config.cors_enabled = cors;
        }
    }
}
