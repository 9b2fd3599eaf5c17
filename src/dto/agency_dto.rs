use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::trim_optional_string;
use crate::models::agency::Agency;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAgency {
    #[validate(length(min = 1))]
    pub agency_name: String,
    #[validate(length(min = 3))]
    pub license_number: String,
    #[validate(length(min = 1))]
    pub director_name: String,
    pub director_phone: Option<String>,
    #[validate(length(min = 5))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub region: Option<String>,
    #[validate(range(min = 1))]
    pub recruiter_count: Option<i32>,
    pub services_offered: Option<String>,
    pub license_path: Option<String>,
    pub registration_certificate_path: Option<String>,
    pub director_photo_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgencyPayload {
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub agency_name: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub license_number: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub director_name: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub director_phone: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub phone: Option<String>,

    #[validate(email)]
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub region: Option<String>,

    #[validate(range(min = 1))]
    pub recruiter_count: Option<i32>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub services_offered: Option<String>,

    pub status: Option<String>,
}

impl UpdateAgencyPayload {
    pub fn apply(&self, agency: &mut Agency) {
        if let Some(v) = &self.agency_name {
            agency.agency_name = v.clone();
        }
        if let Some(v) = &self.license_number {
            agency.license_number = v.clone();
        }
        if let Some(v) = &self.director_name {
            agency.director_name = v.clone();
        }
        if let Some(v) = &self.director_phone {
            agency.director_phone = Some(v.clone());
        }
        if let Some(v) = &self.phone {
            agency.phone = v.clone();
        }
        if let Some(v) = &self.email {
            agency.email = v.clone();
        }
        if let Some(v) = &self.city {
            agency.city = v.clone();
        }
        if let Some(v) = &self.region {
            agency.region = Some(v.clone());
        }
        if let Some(v) = self.recruiter_count {
            agency.recruiter_count = Some(v);
        }
        if let Some(v) = &self.services_offered {
            agency.services_offered = Some(v.clone());
        }
        if let Some(v) = &self.status {
            agency.status = v.clone();
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterAgencyResponse {
    #[serde(rename = "agencyId")]
    pub agency_id: Uuid,
}
