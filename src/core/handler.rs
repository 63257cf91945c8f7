use crate::core::prompt::build_chat_request;
use crate::core::reply::ReadingReply;
use crate::domain::model::ReadingRequest;
use crate::domain::ports::{CompletionService, ConfigProvider};
use crate::utils::error::{ReaderError, Result};
use http::Method;

enum Outcome {
    Preflight,
    Interpretation(String),
}

/// 占卜請求的唯一處理器：檢查方法與內容、組合提示詞、呼叫一次上游、回傳結果。
///
/// 處理器本身不保存任何請求狀態，可以放在 `Arc` 裡給多個請求同時使用。
/// 上游呼叫沒有本地逾時也不重試，取消只靠宿主丟棄 future。
pub struct ReadingHandler<C: CompletionService> {
    completion: C,
    model: String,
    temperature: f64,
    cors_enabled: bool,
}

impl<C: CompletionService> ReadingHandler<C> {
    pub fn new(completion: C, config: &impl ConfigProvider) -> Self {
        Self {
            completion,
            model: config.model().to_string(),
            temperature: config.temperature(),
            cors_enabled: config.cors_enabled(),
        }
    }

    pub fn completion(&self) -> &C {
        &self.completion
    }

    #[tracing::instrument(name = "reading", skip_all, fields(method = %method))]
    pub async fn handle(&self, method: &str, body: &[u8]) -> ReadingReply {
        tracing::debug!(body_len = body.len(), "Reading request received");

        let reply = match self.dispatch(method, body).await {
            Ok(Outcome::Preflight) => ReadingReply::preflight(),
            Ok(Outcome::Interpretation(text)) => ReadingReply::result(text),
            Err(e) => {
                if e.status_code().is_client_error() {
                    tracing::warn!("Rejected reading request: {}", e);
                } else {
                    tracing::error!("OpenAI API Error: {}", e);
                }
                ReadingReply::from_error(&e)
            }
        };

        if self.cors_enabled {
            reply.with_cors()
        } else {
            reply
        }
    }

    async fn dispatch(&self, method: &str, body: &[u8]) -> Result<Outcome> {
        if self.cors_enabled && method == Method::OPTIONS.as_str() {
            return Ok(Outcome::Preflight);
        }

        if method != Method::POST.as_str() {
            return Err(ReaderError::MethodNotAllowed {
                method: method.to_string(),
            });
        }

        let reading = ReadingRequest::from_slice(body)?.into_reading()?;

        tracing::info!(
            model = %self.model,
            cards = reading.cards.len(),
            "收到請求，開始呼叫 OpenAI..."
        );

        let request = build_chat_request(&reading, &self.model, self.temperature);
        let text = self.completion.complete(&request).await?;

        tracing::debug!(result_len = text.len(), "Reading completed");
        Ok(Outcome::Interpretation(text))
    }
}
