#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReaderError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_secret,
    validate_url, Validate,
};
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const MODEL_ENV: &str = "OPENAI_MODEL";
pub const CORS_ENV: &str = "READER_CORS";

/// 程序啟動時建立一次，之後唯讀
#[derive(Clone)]
pub struct ReaderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub cors_enabled: bool,
}

impl fmt::Debug for ReaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("cors_enabled", &self.cors_enabled)
            .finish()
    }
}

impl ReaderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            cors_enabled: true,
        }
    }

    /// 從環境變數讀取。缺少 API 金鑰時直接失敗，不要拖到第一個請求。
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::layered(None, lookup)
    }

    /// 預設值 → TOML 檔 → 環境變數，後面的覆寫前面的
    pub fn layered<F>(file: Option<&TomlConfig>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty());
        let api_key = validate_required_field(API_KEY_ENV, &api_key)?;

        let mut config = Self::new(api_key.as_str());
        if let Some(file) = file {
            file.apply_to(&mut config);
        }
        config.apply_lookup(lookup)?;
        Ok(config)
    }

    /// 用環境變數覆寫金鑰以外的設定
    pub fn apply_lookup<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        if let Some(model) = lookup(MODEL_ENV) {
            self.model = model;
        }
        if let Some(cors) = lookup(CORS_ENV) {
            self.cors_enabled = parse_flag(CORS_ENV, &cors)?;
        }
        Ok(())
    }
}

fn parse_flag(field_name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ReaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected true/false".to_string(),
        }),
    }
}

impl ConfigProvider for ReaderConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn cors_enabled(&self) -> bool {
        self.cors_enabled
    }
}

impl Validate for ReaderConfig {
    fn validate(&self) -> Result<()> {
        validate_secret(API_KEY_ENV, &self.api_key)?;
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("model", &self.model)?;
        validate_range("temperature", self.temperature, 0.0, 2.0)?;

        tracing::info!("✅ Reader configuration validation passed");
        Ok(())
    }
}
