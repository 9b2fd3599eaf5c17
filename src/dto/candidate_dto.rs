use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::trim_optional_string;
use crate::models::candidate::Candidate;

/// Fields assembled from the candidate registration form. File parts are
/// stored before this is built; the `*_path` fields carry the resulting
/// relative paths.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCandidate {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub gender: String,
    pub date_of_birth: NaiveDate,
    #[validate(length(min = 5))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub region: Option<String>,
    #[validate(length(min = 3))]
    pub passport_number: String,
    pub passport_issue_date: Option<NaiveDate>,
    pub passport_expiry_date: Option<NaiveDate>,
    #[validate(length(min = 1))]
    pub preferred_job: String,
    pub preferred_country: Option<String>,
    #[validate(range(min = 0, max = 60))]
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
}

/// Partial update with object-assign semantics: a field present in the
/// payload overwrites, an absent field is left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidatePayload {
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub gender: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub phone: Option<String>,

    #[validate(email)]
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub region: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub passport_number: Option<String>,

    pub passport_issue_date: Option<NaiveDate>,
    pub passport_expiry_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub preferred_job: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub preferred_country: Option<String>,

    #[validate(range(min = 0, max = 60))]
    pub experience_years: Option<i32>,

    pub skill_housekeeping: Option<bool>,
    pub skill_childcare: Option<bool>,
    pub skill_elderly_care: Option<bool>,
    pub skill_cooking: Option<bool>,
    pub skill_driving: Option<bool>,

    /// One of `pending|approved|rejected`; setting `approved` here is
    /// observably equivalent to the approve action.
    pub status: Option<String>,
}

impl UpdateCandidatePayload {
    pub fn apply(&self, candidate: &mut Candidate) {
        if let Some(v) = &self.first_name {
            candidate.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            candidate.last_name = v.clone();
        }
        if let Some(v) = &self.gender {
            candidate.gender = v.clone();
        }
        if let Some(v) = self.date_of_birth {
            candidate.date_of_birth = v;
        }
        if let Some(v) = &self.phone {
            candidate.phone = v.clone();
        }
        if let Some(v) = &self.email {
            candidate.email = v.clone();
        }
        if let Some(v) = &self.city {
            candidate.city = v.clone();
        }
        if let Some(v) = &self.region {
            candidate.region = Some(v.clone());
        }
        if let Some(v) = &self.passport_number {
            candidate.passport_number = v.clone();
        }
        if let Some(v) = self.passport_issue_date {
            candidate.passport_issue_date = Some(v);
        }
        if let Some(v) = self.passport_expiry_date {
            candidate.passport_expiry_date = Some(v);
        }
        if let Some(v) = &self.preferred_job {
            candidate.preferred_job = v.clone();
        }
        if let Some(v) = &self.preferred_country {
            candidate.preferred_country = Some(v.clone());
        }
        if let Some(v) = self.experience_years {
            candidate.experience_years = Some(v);
        }
        if let Some(v) = self.skill_housekeeping {
            candidate.skill_housekeeping = v;
        }
        if let Some(v) = self.skill_childcare {
            candidate.skill_childcare = v;
        }
        if let Some(v) = self.skill_elderly_care {
            candidate.skill_elderly_care = v;
        }
        if let Some(v) = self.skill_cooking {
            candidate.skill_cooking = v;
        }
        if let Some(v) = self.skill_driving {
            candidate.skill_driving = v;
        }
        if let Some(v) = &self.status {
            candidate.status = v.clone();
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterCandidateResponse {
    #[serde(rename = "candidateId")]
    pub candidate_id: Uuid,
}
