use crate::domain::chat::ChatRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 占卜處理器需要的設定
pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn temperature(&self) -> f64;
    fn cors_enabled(&self) -> bool;
}

/// 外部的 chat completion 服務。回傳第一個 choice 的文字。
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}
