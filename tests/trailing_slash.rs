mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use shortlink::routes::app;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let state = common::create_test_state();
    let code = state.registry.create("https://example.com/target").unwrap();
    let service = app(state, &[common::FRONTEND_ORIGIN.to_string()]);

    let response = service.oneshot(get(&format!("/{code}/"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_health_with_trailing_slash() {
    let service = app(
        common::create_test_state(),
        &[common::FRONTEND_ORIGIN.to_string()],
    );

    let response = service.oneshot(get("/health/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_code_with_trailing_slash() {
    let service = app(
        common::create_test_state(),
        &[common::FRONTEND_ORIGIN.to_string()],
    );

    let response = service.oneshot(get("/ZZZZZZ/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
