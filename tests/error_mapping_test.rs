use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value as JsonValue;

use agency_registry_backend::error::Error;

async fn response_parts(err: Error) -> (StatusCode, JsonValue) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_maps_to_404_with_static_message() {
    let (status, body) = response_parts(Error::NotFound("Agency not found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Agency not found");
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let (status, body) = response_parts(Error::BadRequest("firstName is required".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "firstName is required");
}

#[tokio::test]
async fn internal_errors_map_to_500() {
    let (status, _) = response_parts(Error::Internal("boom".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn row_not_found_is_folded_into_not_found() {
    let err: Error = sqlx::Error::RowNotFound.into();
    let (status, _) = response_parts(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
