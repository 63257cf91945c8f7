use crate::domain::model::ReadingResponse;
use crate::utils::error::ReaderError;
use http::header::{
    HeaderName, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use http::{HeaderMap, HeaderValue, StatusCode};

pub const CORS_HEADERS: [(HeaderName, &str); 4] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
    (
        ACCESS_CONTROL_ALLOW_METHODS,
        "GET,OPTIONS,PATCH,DELETE,POST,PUT",
    ),
    (
        ACCESS_CONTROL_ALLOW_HEADERS,
        "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version",
    ),
];

/// 傳輸層無關的回應：狀態碼、標頭、可選的 JSON 內容
#[derive(Debug, Clone)]
pub struct ReadingReply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<ReadingResponse>,
}

impl ReadingReply {
    pub fn result(text: impl Into<String>) -> Self {
        Self::json(StatusCode::OK, ReadingResponse::success(text))
    }

    pub fn from_error(err: &ReaderError) -> Self {
        Self::json(
            err.status_code(),
            ReadingResponse::failure(err.user_friendly_message()),
        )
    }

    /// CORS 預檢：200、沒有內容
    pub fn preflight() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    fn json(status: StatusCode, body: ReadingResponse) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            status,
            headers,
            body: Some(body),
        }
    }

    pub fn with_cors(mut self) -> Self {
        for (name, value) in CORS_HEADERS {
            self.headers.insert(name, HeaderValue::from_static(value));
        }
        self
    }

    pub fn body_string(&self) -> String {
        self.body
            .as_ref()
            .and_then(|body| serde_json::to_string(body).ok())
            .unwrap_or_default()
    }
}
