pub mod agency_service;
pub mod candidate_service;
pub mod dashboard_service;
pub mod employer_service;
pub mod export_service;
pub mod registry;
pub mod upload_service;
