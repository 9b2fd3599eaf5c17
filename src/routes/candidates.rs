use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::dto::candidate_dto::UpdateCandidatePayload;
use crate::dto::DeletedResponse;
use crate::error::{Error, Result};
use crate::models::status::ReviewStatus;
use validator::Validate;
use crate::AppState;

pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.store().list().await?;
    Ok(Json(candidates))
}

pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .store()
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".into()))?;
    Ok(Json(candidate))
}

pub async fn approve_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .store()
        .set_status(id, ReviewStatus::Approved)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".into()))?;
    tracing::info!("Candidate {} approved", id);
    Ok(Json(candidate))
}

pub async fn reject_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .store()
        .set_status(id, ReviewStatus::Rejected)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".into()))?;
    tracing::info!("Candidate {} rejected", id);
    Ok(Json(candidate))
}

pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state
        .candidate_service
        .update(id, &payload)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".into()))?;
    Ok(Json(candidate))
}

pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let deleted = state.candidate_service.store().delete(id).await?;
    Ok(Json(DeletedResponse { deleted }))
}
