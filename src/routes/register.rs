use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;

use crate::dto::agency_dto::{NewAgency, RegisterAgencyResponse};
use crate::dto::candidate_dto::{NewCandidate, RegisterCandidateResponse};
use crate::dto::employer_dto::{NewEmployer, RegisterEmployerResponse};
use crate::error::{Error, Result};
use crate::services::upload_service::{UploadKind, UploadService};
use validator::Validate;
use crate::AppState;

fn parse_bool_field(value: &str) -> bool {
    matches!(value, "true" | "1" | "on" | "yes")
}

fn parse_date_field(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Compensating delete for files already written when a later step of the
/// same registration fails.
async fn discard_uploads(uploads: &UploadService, written: &[String]) {
    for path in written {
        uploads.remove(path).await;
    }
}

async fn assemble_candidate(
    state: &AppState,
    multipart: &mut Multipart,
    written: &mut Vec<String>,
) -> Result<NewCandidate> {
    let mut first_name = String::new();
    let mut last_name = String::new();
    let mut gender = String::new();
    let mut date_of_birth = None;
    let mut phone = String::new();
    let mut email = String::new();
    let mut city = String::new();
    let mut region = None;
    let mut passport_number = String::new();
    let mut passport_issue_date = None;
    let mut passport_expiry_date = None;
    let mut preferred_job = String::new();
    let mut preferred_country = None;
    let mut experience_years = None;
    let mut skill_housekeeping = false;
    let mut skill_childcare = false;
    let mut skill_elderly_care = false;
    let mut skill_cooking = false;
    let mut skill_driving = false;
    let mut passport_scan_path = None;
    let mut photo_path = None;
    let mut medical_clearance_path = None;
    let mut police_clearance_path = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "firstName" => first_name = field.text().await.unwrap_or_default(),
            "lastName" => last_name = field.text().await.unwrap_or_default(),
            "gender" => gender = field.text().await.unwrap_or_default(),
            "dateOfBirth" => {
                date_of_birth = parse_date_field(&field.text().await.unwrap_or_default())
            }
            "phone" => phone = field.text().await.unwrap_or_default(),
            "email" => email = field.text().await.unwrap_or_default(),
            "city" => city = field.text().await.unwrap_or_default(),
            "region" => region = Some(field.text().await.unwrap_or_default()),
            "passportNumber" => passport_number = field.text().await.unwrap_or_default(),
            "passportIssueDate" => {
                passport_issue_date = parse_date_field(&field.text().await.unwrap_or_default())
            }
            "passportExpiryDate" => {
                passport_expiry_date = parse_date_field(&field.text().await.unwrap_or_default())
            }
            "preferredJob" => preferred_job = field.text().await.unwrap_or_default(),
            "preferredCountry" => preferred_country = Some(field.text().await.unwrap_or_default()),
            "experienceYears" => {
                experience_years = field.text().await.unwrap_or_default().parse::<i32>().ok()
            }
            "skillHousekeeping" => {
                skill_housekeeping = parse_bool_field(&field.text().await.unwrap_or_default())
            }
            "skillChildcare" => {
                skill_childcare = parse_bool_field(&field.text().await.unwrap_or_default())
            }
            "skillElderlyCare" => {
                skill_elderly_care = parse_bool_field(&field.text().await.unwrap_or_default())
            }
            "skillCooking" => {
                skill_cooking = parse_bool_field(&field.text().await.unwrap_or_default())
            }
            "skillDriving" => {
                skill_driving = parse_bool_field(&field.text().await.unwrap_or_default())
            }
            "passportScan" | "photo" | "medicalClearance" | "policeClearance" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read upload bytes: {}", e);
                    Error::BadRequest("Failed to read file upload".into())
                })?;
                if data.is_empty() {
                    continue;
                }
                let path = state
                    .uploads
                    .save(UploadKind::Candidates, &filename, &data)
                    .await?;
                written.push(path.clone());
                match field_name.as_str() {
                    "passportScan" => passport_scan_path = Some(path),
                    "photo" => photo_path = Some(path),
                    "medicalClearance" => medical_clearance_path = Some(path),
                    _ => police_clearance_path = Some(path),
                }
            }
            _ => {}
        }
    }

    if first_name.is_empty() {
        return Err(Error::BadRequest("firstName is required".into()));
    }
    if last_name.is_empty() {
        return Err(Error::BadRequest("lastName is required".into()));
    }
    if gender.is_empty() {
        return Err(Error::BadRequest("gender is required".into()));
    }
    if phone.is_empty() {
        return Err(Error::BadRequest("phone is required".into()));
    }
    if email.is_empty() {
        return Err(Error::BadRequest("email is required".into()));
    }
    if city.is_empty() {
        return Err(Error::BadRequest("city is required".into()));
    }
    if passport_number.is_empty() {
        return Err(Error::BadRequest("passportNumber is required".into()));
    }
    if preferred_job.is_empty() {
        return Err(Error::BadRequest("preferredJob is required".into()));
    }
    let date_of_birth =
        date_of_birth.ok_or_else(|| Error::BadRequest("dateOfBirth is required".into()))?;

    let new = NewCandidate {
        first_name,
        last_name,
        gender,
        date_of_birth,
        phone,
        email,
        city,
        region,
        passport_number,
        passport_issue_date,
        passport_expiry_date,
        preferred_job,
        preferred_country,
        experience_years,
        skill_housekeeping,
        skill_childcare,
        skill_elderly_care,
        skill_cooking,
        skill_driving,
        passport_scan_path,
        photo_path,
        medical_clearance_path,
        police_clearance_path,
    };
    new.validate()?;
    Ok(new)
}

pub async fn register_candidate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    tracing::info!("Candidate registration received");
    let mut written: Vec<String> = Vec::new();

    let new = match assemble_candidate(&state, &mut multipart, &mut written).await {
        Ok(new) => new,
        Err(e) => {
            discard_uploads(&state.uploads, &written).await;
            return Err(e);
        }
    };

    let candidate = match state.candidate_service.create(new).await {
        Ok(candidate) => candidate,
        Err(e) => {
            tracing::error!("Failed to persist candidate: {}", e);
            discard_uploads(&state.uploads, &written).await;
            return Err(e);
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(RegisterCandidateResponse {
            candidate_id: candidate.id,
        }),
    ))
}

async fn assemble_employer(
    state: &AppState,
    multipart: &mut Multipart,
    written: &mut Vec<String>,
) -> Result<NewEmployer> {
    let mut company_name = String::new();
    let mut business_sector = String::new();
    let mut employee_count = None;
    let mut has_hired_before = false;
    let mut contact_person_name = String::new();
    let mut contact_person_title = None;
    let mut phone = String::new();
    let mut email = String::new();
    let mut city = String::new();
    let mut region = None;
    let mut license_path = None;
    let mut registration_certificate_path = None;
    let mut contact_photo_path = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "companyName" => company_name = field.text().await.unwrap_or_default(),
            "businessSector" => business_sector = field.text().await.unwrap_or_default(),
            "employeeCount" => {
                employee_count = field.text().await.unwrap_or_default().parse::<i32>().ok()
            }
            "hasHiredBefore" => {
                has_hired_before = parse_bool_field(&field.text().await.unwrap_or_default())
            }
            "contactPersonName" => contact_person_name = field.text().await.unwrap_or_default(),
            "contactPersonTitle" => {
                contact_person_title = Some(field.text().await.unwrap_or_default())
            }
            "phone" => phone = field.text().await.unwrap_or_default(),
            "email" => email = field.text().await.unwrap_or_default(),
            "city" => city = field.text().await.unwrap_or_default(),
            "region" => region = Some(field.text().await.unwrap_or_default()),
            "license" | "registrationCertificate" | "contactPhoto" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read upload bytes: {}", e);
                    Error::BadRequest("Failed to read file upload".into())
                })?;
                if data.is_empty() {
                    continue;
                }
                let path = state
                    .uploads
                    .save(UploadKind::Employers, &filename, &data)
                    .await?;
                written.push(path.clone());
                match field_name.as_str() {
                    "license" => license_path = Some(path),
                    "registrationCertificate" => registration_certificate_path = Some(path),
                    _ => contact_photo_path = Some(path),
                }
            }
            _ => {}
        }
    }

    if company_name.is_empty() {
        return Err(Error::BadRequest("companyName is required".into()));
    }
    if business_sector.is_empty() {
        return Err(Error::BadRequest("businessSector is required".into()));
    }
    if contact_person_name.is_empty() {
        return Err(Error::BadRequest("contactPersonName is required".into()));
    }
    if phone.is_empty() {
        return Err(Error::BadRequest("phone is required".into()));
    }
    if email.is_empty() {
        return Err(Error::BadRequest("email is required".into()));
    }
    if city.is_empty() {
        return Err(Error::BadRequest("city is required".into()));
    }

    let new = NewEmployer {
        company_name,
        business_sector,
        employee_count,
        has_hired_before,
        contact_person_name,
        contact_person_title,
        phone,
        email,
        city,
        region,
        license_path,
        registration_certificate_path,
        contact_photo_path,
    };
    new.validate()?;
    Ok(new)
}

pub async fn register_employer(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    tracing::info!("Employer registration received");
    let mut written: Vec<String> = Vec::new();

    let new = match assemble_employer(&state, &mut multipart, &mut written).await {
        Ok(new) => new,
        Err(e) => {
            discard_uploads(&state.uploads, &written).await;
            return Err(e);
        }
    };

    let employer = match state.employer_service.create(new).await {
        Ok(employer) => employer,
        Err(e) => {
            tracing::error!("Failed to persist employer: {}", e);
            discard_uploads(&state.uploads, &written).await;
            return Err(e);
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(RegisterEmployerResponse {
            employer_id: employer.id,
        }),
    ))
}

async fn assemble_agency(
    state: &AppState,
    multipart: &mut Multipart,
    written: &mut Vec<String>,
) -> Result<NewAgency> {
    let mut agency_name = String::new();
    let mut license_number = String::new();
    let mut director_name = String::new();
    let mut director_phone = None;
    let mut phone = String::new();
    let mut email = String::new();
    let mut city = String::new();
    let mut region = None;
    let mut recruiter_count = None;
    let mut services_offered = None;
    let mut license_path = None;
    let mut registration_certificate_path = None;
    let mut director_photo_path = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "agencyName" => agency_name = field.text().await.unwrap_or_default(),
            "licenseNumber" => license_number = field.text().await.unwrap_or_default(),
            "directorName" => director_name = field.text().await.unwrap_or_default(),
            "directorPhone" => director_phone = Some(field.text().await.unwrap_or_default()),
            "phone" => phone = field.text().await.unwrap_or_default(),
            "email" => email = field.text().await.unwrap_or_default(),
            "city" => city = field.text().await.unwrap_or_default(),
            "region" => region = Some(field.text().await.unwrap_or_default()),
            "recruiterCount" => {
                recruiter_count = field.text().await.unwrap_or_default().parse::<i32>().ok()
            }
            "servicesOffered" => services_offered = Some(field.text().await.unwrap_or_default()),
            "license" | "registrationCertificate" | "directorPhoto" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read upload bytes: {}", e);
                    Error::BadRequest("Failed to read file upload".into())
                })?;
                if data.is_empty() {
                    continue;
                }
                let path = state
                    .uploads
                    .save(UploadKind::Agencies, &filename, &data)
                    .await?;
                written.push(path.clone());
                match field_name.as_str() {
                    "license" => license_path = Some(path),
                    "registrationCertificate" => registration_certificate_path = Some(path),
                    _ => director_photo_path = Some(path),
                }
            }
            _ => {}
        }
    }

    if agency_name.is_empty() {
        return Err(Error::BadRequest("agencyName is required".into()));
    }
    if license_number.is_empty() {
        return Err(Error::BadRequest("licenseNumber is required".into()));
    }
    if director_name.is_empty() {
        return Err(Error::BadRequest("directorName is required".into()));
    }
    if phone.is_empty() {
        return Err(Error::BadRequest("phone is required".into()));
    }
    if email.is_empty() {
        return Err(Error::BadRequest("email is required".into()));
    }
    if city.is_empty() {
        return Err(Error::BadRequest("city is required".into()));
    }

    let new = NewAgency {
        agency_name,
        license_number,
        director_name,
        director_phone,
        phone,
        email,
        city,
        region,
        recruiter_count,
        services_offered,
        license_path,
        registration_certificate_path,
        director_photo_path,
    };
    new.validate()?;
    Ok(new)
}

pub async fn register_agency(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    tracing::info!("Agency registration received");
    let mut written: Vec<String> = Vec::new();

    let new = match assemble_agency(&state, &mut multipart, &mut written).await {
        Ok(new) => new,
        Err(e) => {
            discard_uploads(&state.uploads, &written).await;
            return Err(e);
        }
    };

    let agency = match state.agency_service.create(new).await {
        Ok(agency) => agency,
        Err(e) => {
            tracing::error!("Failed to persist agency: {}", e);
            discard_uploads(&state.uploads, &written).await;
            return Err(e);
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(RegisterAgencyResponse {
            agency_id: agency.id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::{parse_bool_field, parse_date_field};

    #[test]
    fn bool_fields_accept_form_style_values() {
        assert!(parse_bool_field("true"));
        assert!(parse_bool_field("1"));
        assert!(parse_bool_field("on"));
        assert!(!parse_bool_field("false"));
        assert!(!parse_bool_field(""));
    }

    #[test]
    fn date_fields_use_iso_format() {
        assert_eq!(
            parse_date_field("1995-04-02"),
            chrono::NaiveDate::from_ymd_opt(1995, 4, 2)
        );
        assert_eq!(parse_date_field("02.04.1995"), None);
        assert_eq!(parse_date_field(""), None);
    }
}
