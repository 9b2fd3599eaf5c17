use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A candidate application. File-path fields hold relative paths under
/// `uploads/candidates/`, written during registration; they are not
/// integrity-checked against the file's continued existence.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub region: Option<String>,
    pub passport_number: String,
    pub passport_issue_date: Option<NaiveDate>,
    pub passport_expiry_date: Option<NaiveDate>,
    pub preferred_job: String,
    pub preferred_country: Option<String>,
    pub experience_years: Option<i32>,
    pub skill_housekeeping: bool,
    pub skill_childcare: bool,
    pub skill_elderly_care: bool,
    pub skill_cooking: bool,
    pub skill_driving: bool,
    pub passport_scan_path: Option<String>,
    pub photo_path: Option<String>,
    pub medical_clearance_path: Option<String>,
    pub police_clearance_path: Option<String>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
