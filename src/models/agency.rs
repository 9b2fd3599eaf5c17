use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A partner-agency registration. Mirrors the employer lifecycle, including
/// the independent `verified` flag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: Uuid,
    pub agency_name: String,
    pub license_number: String,
    pub director_name: String,
    pub director_phone: Option<String>,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub region: Option<String>,
    pub recruiter_count: Option<i32>,
    pub services_offered: Option<String>,
    pub license_path: Option<String>,
    pub registration_certificate_path: Option<String>,
    pub director_photo_path: Option<String>,
    pub status: String,
    pub verified: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
