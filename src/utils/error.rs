use http::StatusCode;
use thiserror::Error;

/// 回傳給前端的固定錯誤訊息
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const MISSING_DATA_MESSAGE: &str = "缺少必要資料";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "AI 服務暫時無法使用，請稍後再試。";

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("Missing required data: {message}")]
    MissingData { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream error: {message}")]
    UpstreamError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端的錯誤，不會呼叫上游
    Client,
    /// 上游 chat completion 服務失敗
    Upstream,
    Configuration,
    Internal,
}

impl ReaderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MethodNotAllowed { .. } | Self::MissingData { .. } => ErrorCategory::Client,
            Self::ApiError(_) | Self::UpstreamError { .. } => ErrorCategory::Upstream,
            Self::TomlError(_)
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingData { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 放進 `{"error": ...}` 的文字。上游與內部錯誤只給固定訊息，細節只進日誌。
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Client => match self {
                Self::MethodNotAllowed { .. } => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
                _ => MISSING_DATA_MESSAGE.to_string(),
            },
            ErrorCategory::Configuration => self.to_string(),
            ErrorCategory::Upstream | ErrorCategory::Internal => {
                SERVICE_UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingConfigError { field } => {
                format!("請設定環境變數 {} 後重新啟動", field)
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("請檢查 {} 的設定值", field)
            }
            Self::TomlError(_) => "請檢查 TOML 設定檔格式".to_string(),
            Self::IoError(_) => "請確認設定檔路徑與內容是否正確".to_string(),
            Self::ApiError(_) | Self::UpstreamError { .. } => {
                "請確認 API 金鑰、額度與 base URL 是否正確".to_string()
            }
            Self::MethodNotAllowed { .. } | Self::MissingData { .. } => {
                "請以 POST 傳送 question 與 cardResults".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReaderError>;
