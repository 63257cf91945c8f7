use crate::utils::error::{ReaderError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 單張抽出的牌。牌的內容不做檢查，任何 JSON 值都轉成文字放進提示詞。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDraw {
    #[serde(deserialize_with = "lenient_text")]
    pub position: String,
    #[serde(deserialize_with = "lenient_text")]
    pub card_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status_text: String,
    #[serde(deserialize_with = "lenient_text")]
    pub desc: String,
}

/// null 變成空字串，數字、布林等其他值用 JSON 文字表示
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// 前端送來的原始請求。欄位是否存在要到 [`ReadingRequest::into_reading`] 才檢查。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub card_results: Option<Vec<CardDraw>>,
}

/// 通過檢查、可以送去占卜的請求
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub question: String,
    pub cards: Vec<CardDraw>,
}

impl ReadingRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ReaderError::MissingData {
                message: "request body is empty".to_string(),
            });
        }

        serde_json::from_slice(body).map_err(|e| ReaderError::MissingData {
            message: format!("request body is not a reading request: {}", e),
        })
    }

    pub fn into_reading(self) -> Result<Reading> {
        let mut issues = Vec::new();

        let question = self.question.filter(|q| !q.is_empty());
        if question.is_none() {
            issues.push("question is missing or empty");
        }

        let cards = self.card_results.filter(|cards| !cards.is_empty());
        if cards.is_none() {
            issues.push("cardResults is missing or empty");
        }

        match (question, cards) {
            (Some(question), Some(cards)) => Ok(Reading { question, cards }),
            _ => Err(ReaderError::MissingData {
                message: issues.join(", "),
            }),
        }
    }
}

/// 回傳給前端的內容，成功與失敗只會出現其中一種
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReadingResponse {
    Success { result: String },
    Failure { error: String },
}

impl ReadingResponse {
    pub fn success(result: impl Into<String>) -> Self {
        Self::Success {
            result: result.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }
}
