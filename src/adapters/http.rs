use crate::core::handler::ReadingHandler;
use crate::core::reply::ReadingReply;
use crate::domain::model::ReadingResponse;
use crate::domain::ports::CompletionService;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

pub const READING_PATH: &str = "/api/read";

pub fn router<C: CompletionService + 'static>(handler: Arc<ReadingHandler<C>>) -> Router {
    Router::new()
        .route(READING_PATH, any(read::<C>))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(handler)
}

async fn read<C: CompletionService + 'static>(
    State(handler): State<Arc<ReadingHandler<C>>>,
    method: Method,
    body: Bytes,
) -> ReadingReply {
    handler.handle(method.as_str(), &body).await
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "tarot-reader",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ReadingResponse::failure("Not found")),
    )
}

impl IntoResponse for ReadingReply {
    fn into_response(self) -> Response {
        let body = self.body_string();
        (self.status, self.headers, Body::from(body)).into_response()
    }
}
