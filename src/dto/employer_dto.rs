use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::trim_optional_string;
use crate::models::employer::Employer;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEmployer {
    #[validate(length(min = 1))]
    pub company_name: String,
    #[validate(length(min = 1))]
    pub business_sector: String,
    #[validate(range(min = 1))]
    pub employee_count: Option<i32>,
    pub has_hired_before: bool,
    #[validate(length(min = 1))]
    pub contact_person_name: String,
    pub contact_person_title: Option<String>,
    #[validate(length(min = 5))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub region: Option<String>,
    pub license_path: Option<String>,
    pub registration_certificate_path: Option<String>,
    pub contact_photo_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployerPayload {
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub company_name: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub business_sector: Option<String>,

    #[validate(range(min = 1))]
    pub employee_count: Option<i32>,

    pub has_hired_before: Option<bool>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub contact_person_name: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub contact_person_title: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub phone: Option<String>,

    #[validate(email)]
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub region: Option<String>,

    pub status: Option<String>,
}

impl UpdateEmployerPayload {
    pub fn apply(&self, employer: &mut Employer) {
        if let Some(v) = &self.company_name {
            employer.company_name = v.clone();
        }
        if let Some(v) = &self.business_sector {
            employer.business_sector = v.clone();
        }
        if let Some(v) = self.employee_count {
            employer.employee_count = Some(v);
        }
        if let Some(v) = self.has_hired_before {
            employer.has_hired_before = v;
        }
        if let Some(v) = &self.contact_person_name {
            employer.contact_person_name = v.clone();
        }
        if let Some(v) = &self.contact_person_title {
            employer.contact_person_title = Some(v.clone());
        }
        if let Some(v) = &self.phone {
            employer.phone = v.clone();
        }
        if let Some(v) = &self.email {
            employer.email = v.clone();
        }
        if let Some(v) = &self.city {
            employer.city = v.clone();
        }
        if let Some(v) = &self.region {
            employer.region = Some(v.clone());
        }
        if let Some(v) = &self.status {
            employer.status = v.clone();
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterEmployerResponse {
    #[serde(rename = "employerId")]
    pub employer_id: Uuid,
}
