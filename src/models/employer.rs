use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An employer registration. `verified` is independent of `status` and is
/// only mutated by the dedicated verify action.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub id: Uuid,
    pub company_name: String,
    pub business_sector: String,
    pub employee_count: Option<i32>,
    pub has_hired_before: bool,
    pub contact_person_name: String,
    pub contact_person_title: Option<String>,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub region: Option<String>,
    pub license_path: Option<String>,
    pub registration_certificate_path: Option<String>,
    pub contact_photo_path: Option<String>,
    pub status: String,
    pub verified: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
