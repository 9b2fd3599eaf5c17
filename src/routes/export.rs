use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::config::get_config;
use crate::dto::BulkExportRequest;
use crate::error::Result;
use crate::services::export_service::ExportService;
use crate::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PDF_CONTENT_TYPE: &str = "application/pdf";

fn keep_selected<R>(records: Vec<R>, ids: &Option<Vec<Uuid>>, id_of: impl Fn(&R) -> Uuid) -> Vec<R> {
    match ids {
        Some(ids) if !ids.is_empty() => records
            .into_iter()
            .filter(|r| ids.contains(&id_of(r)))
            .collect(),
        _ => records,
    }
}

fn attachment(content_type: &'static str, filename: String, body: Vec<u8>) -> impl IntoResponse {
    let disposition = format!("attachment; filename=\"{}\"", filename);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
}

pub async fn export_candidates(
    State(state): State<AppState>,
    Json(payload): Json<BulkExportRequest>,
) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.store().list().await?;
    let candidates = keep_selected(candidates, &payload.ids, |c| c.id);

    let config = get_config();
    let to_url = |path: &str| config.file_url(path);
    let buffer = ExportService::candidates_workbook(&candidates, &to_url)?;
    let filename = format!(
        "candidates_export_{}.xlsx",
        chrono::Utc::now().format("%Y%m%d_%H%M")
    );
    Ok(attachment(XLSX_CONTENT_TYPE, filename, buffer))
}

pub async fn export_candidates_pdf(
    State(state): State<AppState>,
    Json(payload): Json<BulkExportRequest>,
) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.store().list().await?;
    let candidates = keep_selected(candidates, &payload.ids, |c| c.id);

    let buffer = ExportService::candidates_pdf(&candidates)?;
    let filename = format!(
        "candidates_export_{}.pdf",
        chrono::Utc::now().format("%Y%m%d_%H%M")
    );
    Ok(attachment(PDF_CONTENT_TYPE, filename, buffer))
}

pub async fn export_employers(
    State(state): State<AppState>,
    Json(payload): Json<BulkExportRequest>,
) -> Result<impl IntoResponse> {
    let employers = state.employer_service.store().list().await?;
    let employers = keep_selected(employers, &payload.ids, |e| e.id);

    let config = get_config();
    let to_url = |path: &str| config.file_url(path);
    let buffer = ExportService::employers_workbook(&employers, &to_url)?;
    let filename = format!(
        "employers_export_{}.xlsx",
        chrono::Utc::now().format("%Y%m%d_%H%M")
    );
    Ok(attachment(XLSX_CONTENT_TYPE, filename, buffer))
}

pub async fn export_employers_pdf(
    State(state): State<AppState>,
    Json(payload): Json<BulkExportRequest>,
) -> Result<impl IntoResponse> {
    let employers = state.employer_service.store().list().await?;
    let employers = keep_selected(employers, &payload.ids, |e| e.id);

    let buffer = ExportService::employers_pdf(&employers)?;
    let filename = format!(
        "employers_export_{}.pdf",
        chrono::Utc::now().format("%Y%m%d_%H%M")
    );
    Ok(attachment(PDF_CONTENT_TYPE, filename, buffer))
}

pub async fn export_agencies(
    State(state): State<AppState>,
    Json(payload): Json<BulkExportRequest>,
) -> Result<impl IntoResponse> {
    let agencies = state.agency_service.store().list().await?;
    let agencies = keep_selected(agencies, &payload.ids, |a| a.id);

    let config = get_config();
    let to_url = |path: &str| config.file_url(path);
    let buffer = ExportService::agencies_workbook(&agencies, &to_url)?;
    let filename = format!(
        "agencies_export_{}.xlsx",
        chrono::Utc::now().format("%Y%m%d_%H%M")
    );
    Ok(attachment(XLSX_CONTENT_TYPE, filename, buffer))
}

pub async fn export_agencies_pdf(
    State(state): State<AppState>,
    Json(payload): Json<BulkExportRequest>,
) -> Result<impl IntoResponse> {
    let agencies = state.agency_service.store().list().await?;
    let agencies = keep_selected(agencies, &payload.ids, |a| a.id);

    let buffer = ExportService::agencies_pdf(&agencies)?;
    let filename = format!(
        "agencies_export_{}.pdf",
        chrono::Utc::now().format("%Y%m%d_%H%M")
    );
    Ok(attachment(PDF_CONTENT_TYPE, filename, buffer))
}
