use crate::domain::chat::{ChatCompletion, ChatRequest};
use crate::domain::ports::{CompletionService, ConfigProvider};
use crate::utils::error::{ReaderError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// OpenAI 相容的 `/chat/completions` 用戶端。啟動時建立一次，之後唯讀共用。
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &impl ConfigProvider) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().to_string(),
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let url = self.completions_url();
        tracing::debug!("Making chat completion request to: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Chat completion response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(ReaderError::UpstreamError {
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let completion: ChatCompletion = response.json().await?;
        completion.into_first_text()
    }
}
