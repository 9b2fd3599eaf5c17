use axum::{extract::State, response::IntoResponse, Json};

use crate::error::Result;
use crate::AppState;

pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.dashboard_service.stats().await?;
    Ok(Json(stats))
}

pub async fn get_recent_activity(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.dashboard_service.recent_activity().await?;
    Ok(Json(items))
}
