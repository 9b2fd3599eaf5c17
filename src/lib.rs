pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    agency_service::AgencyService, candidate_service::CandidateService,
    dashboard_service::DashboardService, employer_service::EmployerService,
    upload_service::UploadService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub uploads: UploadService,
    pub candidate_service: CandidateService,
    pub employer_service: EmployerService,
    pub agency_service: AgencyService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();

        let uploads = UploadService::new(config.uploads_dir.as_str());
        let candidate_service = CandidateService::new(pool.clone());
        let employer_service = EmployerService::new(pool.clone());
        let agency_service = AgencyService::new(pool.clone());
        let dashboard_service = DashboardService::new(pool.clone());

        Self {
            pool,
            uploads,
            candidate_service,
            employer_service,
            agency_service,
            dashboard_service,
        }
    }
}
