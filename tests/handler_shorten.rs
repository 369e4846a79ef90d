mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::json;
use shortlink::api::dto::shorten::MAX_URL_LENGTH;
use shortlink::domain::RegistrySettings;

#[tokio::test]
async fn test_shorten_success() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["short_url"], format!("{}/{}", common::BASE_URL, code));

    assert_eq!(state.registry.resolve(code).unwrap(), "https://example.com/a");
}

#[tokio::test]
async fn test_shorten_same_url_twice() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["code"], second["code"]);
    assert_eq!(state.registry.len(), 2);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "URL cannot be empty");
    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_shorten_unsupported_scheme() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "ftp://x" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("http://")
    );
    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_shorten_url_too_long() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let long_url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH as usize));

    let response = server
        .post("/shorten")
        .json(&json!({ "url": long_url }))
        .await;

    response.assert_status_bad_request();
    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid request body");
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .bytes(Bytes::from_static(b"{\"url\": "))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_without_json_content_type() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .text(r#"{"url": "https://example.com"}"#)
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_shorten_exhausted_capacity() {
    let state = common::create_test_state_with(RegistrySettings {
        code_length: 1,
        alphabet: "a".to_string(),
        max_attempts: 3,
        reserved: Vec::new(),
    });
    let server = common::create_test_server(state.clone());

    server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/1" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/2" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "capacity_exhausted");
    assert_eq!(state.registry.len(), 1);
}

#[tokio::test]
async fn test_shorten_rejects_get() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/shorten").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_shorten_cors_preflight() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .method(axum::http::Method::OPTIONS, "/shorten")
        .add_header("Origin", common::FRONTEND_ORIGIN)
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "content-type")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin"),
        common::FRONTEND_ORIGIN
    );
    assert_eq!(response.header("access-control-allow-credentials"), "true");
}

#[tokio::test]
async fn test_shorten_cors_unknown_origin() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .add_header("Origin", "https://evil.example")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
