use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::dto::employer_dto::UpdateEmployerPayload;
use crate::dto::DeletedResponse;
use crate::error::{Error, Result};
use crate::models::status::ReviewStatus;
use validator::Validate;
use crate::AppState;

pub async fn list_employers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let employers = state.employer_service.store().list().await?;
    Ok(Json(employers))
}

pub async fn get_employer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let employer = state
        .employer_service
        .store()
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Employer not found".into()))?;
    Ok(Json(employer))
}

pub async fn approve_employer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let employer = state
        .employer_service
        .store()
        .set_status(id, ReviewStatus::Approved)
        .await?
        .ok_or_else(|| Error::NotFound("Employer not found".into()))?;
    tracing::info!("Employer {} approved", id);
    Ok(Json(employer))
}

pub async fn reject_employer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let employer = state
        .employer_service
        .store()
        .set_status(id, ReviewStatus::Rejected)
        .await?
        .ok_or_else(|| Error::NotFound("Employer not found".into()))?;
    tracing::info!("Employer {} rejected", id);
    Ok(Json(employer))
}

/// Marks the employer as vetted. Independent of the approval status.
pub async fn verify_employer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let employer = state
        .employer_service
        .store()
        .set_verified(id, true)
        .await?
        .ok_or_else(|| Error::NotFound("Employer not found".into()))?;
    tracing::info!("Employer {} verified", id);
    Ok(Json(employer))
}

pub async fn update_employer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployerPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let employer = state
        .employer_service
        .update(id, &payload)
        .await?
        .ok_or_else(|| Error::NotFound("Employer not found".into()))?;
    Ok(Json(employer))
}

pub async fn delete_employer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let deleted = state.employer_service.store().delete(id).await?;
    Ok(Json(DeletedResponse { deleted }))
}
