use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use tower::ServiceExt;

use agency_registry_backend::middleware::rate_limit;

fn limited_app(rps: u32) -> Router {
    Router::new()
        .route("/ping", get(|| async { "pong" }))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(rps),
            rate_limit::rps_middleware,
        ))
}

#[tokio::test]
async fn requests_within_the_limit_pass() {
    let app = limited_app(3);
    for _ in 0..3 {
        let req = Request::builder()
            .method("GET")
            .uri("/ping")
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn requests_over_the_limit_get_429() {
    let app = limited_app(2);
    let mut last_status = StatusCode::OK;
    for _ in 0..3 {
        let req = Request::builder()
            .method("GET")
            .uri("/ping")
            .body(Body::empty())
            .unwrap();
        last_status = app.clone().oneshot(req).await.unwrap().status();
    }
    assert_eq!(last_status, StatusCode::TOO_MANY_REQUESTS);
}
