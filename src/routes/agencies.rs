use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::dto::agency_dto::UpdateAgencyPayload;
use crate::dto::DeletedResponse;
use crate::error::{Error, Result};
use crate::models::status::ReviewStatus;
use validator::Validate;
use crate::AppState;

pub async fn list_agencies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let agencies = state.agency_service.store().list().await?;
    Ok(Json(agencies))
}

pub async fn get_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let agency = state
        .agency_service
        .store()
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Agency not found".into()))?;
    Ok(Json(agency))
}

pub async fn approve_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let agency = state
        .agency_service
        .store()
        .set_status(id, ReviewStatus::Approved)
        .await?
        .ok_or_else(|| Error::NotFound("Agency not found".into()))?;
    tracing::info!("Agency {} approved", id);
    Ok(Json(agency))
}

pub async fn reject_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let agency = state
        .agency_service
        .store()
        .set_status(id, ReviewStatus::Rejected)
        .await?
        .ok_or_else(|| Error::NotFound("Agency not found".into()))?;
    tracing::info!("Agency {} rejected", id);
    Ok(Json(agency))
}

/// Marks the agency as vetted. Independent of the approval status.
pub async fn verify_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let agency = state
        .agency_service
        .store()
        .set_verified(id, true)
        .await?
        .ok_or_else(|| Error::NotFound("Agency not found".into()))?;
    tracing::info!("Agency {} verified", id);
    Ok(Json(agency))
}

pub async fn update_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAgencyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let agency = state
        .agency_service
        .update(id, &payload)
        .await?
        .ok_or_else(|| Error::NotFound("Agency not found".into()))?;
    Ok(Json(agency))
}

pub async fn delete_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let deleted = state.agency_service.store().delete(id).await?;
    Ok(Json(DeletedResponse { deleted }))
}
