//! Lambda function URL 的事件與回應格式（payload format 2.0）

use crate::core::handler::ReadingHandler;
use crate::core::reply::ReadingReply;
use crate::domain::ports::CompletionService;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlRequest {
    #[serde(default)]
    pub request_context: RequestContext,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: HttpContext,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpContext {
    #[serde(default)]
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl FunctionUrlRequest {
    pub fn method(&self) -> &str {
        &self.request_context.http.method
    }

    /// 解不開的 base64 內容當成空的，交給處理器回 400
    pub fn body_bytes(&self) -> Vec<u8> {
        let Some(body) = self.body.as_deref() else {
            return Vec::new();
        };

        if !self.is_base64_encoded {
            return body.as_bytes().to_vec();
        }

        STANDARD.decode(body).unwrap_or_else(|e| {
            tracing::warn!("Failed to decode base64 request body: {}", e);
            Vec::new()
        })
    }
}

impl From<ReadingReply> for FunctionUrlResponse {
    fn from(reply: ReadingReply) -> Self {
        let headers = reply
            .headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        Self {
            status_code: reply.status.as_u16(),
            headers,
            body: reply.body_string(),
            is_base64_encoded: false,
        }
    }
}

pub async fn handle_event<C: CompletionService>(
    handler: &ReadingHandler<C>,
    event: &FunctionUrlRequest,
) -> FunctionUrlResponse {
    let body = event.body_bytes();
    handler.handle(event.method(), &body).await.into()
}
