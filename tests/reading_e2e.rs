use anyhow::Result;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tarot_reader::adapters::http::READING_PATH;
use tarot_reader::utils::error::{MISSING_DATA_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE};
use tarot_reader::{router, OpenAiClient, ReaderConfig, ReadingHandler};
use tower::ServiceExt;

fn build_test_app(server: &MockServer, cors_enabled: bool) -> axum::Router {
    let mut config = ReaderConfig::new("sk-test");
    config.base_url = server.url("/v1");
    config.cors_enabled = cors_enabled;

    let client = OpenAiClient::new(&config);
    router(Arc::new(ReadingHandler::new(client, &config)))
}

fn reading_request(method: Method, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(READING_PATH)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn career_question() -> String {
    json!({
        "question": "我該換工作嗎？",
        "cardResults": [
            {"position": "過去", "cardName": "愚者", "statusText": "正位", "desc": "新的開始"},
            {"position": "現在", "cardName": "塔", "statusText": "逆位", "desc": "延遲的變動"},
            {"position": "未來", "cardName": "星星", "statusText": "正位", "desc": "希望"}
        ]
    })
    .to_string()
}

/// 完整流程：router → handler → reqwest → 假的 OpenAI
#[tokio::test]
async fn test_career_reading_round_trip() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer sk-test")
            .json_body_partial(r#"{"model":"gpt-3.5-turbo","temperature":0.7}"#)
            .body_contains("求卜者的問題是：「我該換工作嗎？」")
            .body_contains("【過去】：愚者 正位 (牌義參考: 新的開始)")
            .body_contains("【現在】：塔 逆位 (牌義參考: 延遲的變動)")
            .body_contains("【未來】：星星 正位 (牌義參考: 希望)");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "<p>...</p>"},
                    "finish_reason": "stop"
                }]
            }));
    });

    let app = build_test_app(&server, true);
    let response = app
        .oneshot(reading_request(Method::POST, career_question()))
        .await?;

    api_mock.assert_hits(1);
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let body = response.into_body().collect().await?.to_bytes();
    assert_eq!(&body[..], br#"{"result":"<p>...</p>"}"#);
    Ok(())
}

#[tokio::test]
async fn test_missing_data_never_reaches_upstream() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200);
    });

    let app = build_test_app(&server, true);
    let response = app
        .oneshot(reading_request(
            Method::POST,
            json!({"question": "我該換工作嗎？"}).to_string(),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await?.to_bytes();
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&body)?,
        json!({ "error": MISSING_DATA_MESSAGE })
    );
    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_upstream_failure_is_hidden_from_caller() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(429).json_body(json!({
            "error": {"message": "You exceeded your current quota", "type": "insufficient_quota"}
        }));
    });

    let app = build_test_app(&server, true);
    let response = app
        .oneshot(reading_request(Method::POST, career_question()))
        .await?;

    api_mock.assert_hits(1);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await?.to_bytes();
    let text = String::from_utf8(body.to_vec())?;
    assert_eq!(text, json!({ "error": SERVICE_UNAVAILABLE_MESSAGE }).to_string());
    assert!(!text.contains("quota"));
    Ok(())
}

#[tokio::test]
async fn test_preflight_and_wrong_method_make_no_calls() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200);
    });

    let app = build_test_app(&server, true);

    let preflight = app
        .clone()
        .oneshot(reading_request(Method::OPTIONS, String::new()))
        .await?;
    assert_eq!(preflight.status(), StatusCode::OK);
    assert_eq!(preflight.headers()["access-control-allow-credentials"], "true");
    assert!(preflight.into_body().collect().await?.to_bytes().is_empty());

    let wrong_method = app
        .oneshot(reading_request(Method::DELETE, career_question()))
        .await?;
    assert_eq!(wrong_method.status(), StatusCode::METHOD_NOT_ALLOWED);

    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_cors_disabled_rejects_preflight() -> Result<()> {
    let server = MockServer::start();
    let app = build_test_app(&server, false);

    let response = app
        .oneshot(reading_request(Method::OPTIONS, String::new()))
        .await?;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
    Ok(())
}
