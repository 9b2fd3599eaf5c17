use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

use agency_registry_backend::dto::candidate_dto::UpdateCandidatePayload;
use agency_registry_backend::dto::employer_dto::UpdateEmployerPayload;
use agency_registry_backend::models::candidate::Candidate;
use agency_registry_backend::models::employer::Employer;
use agency_registry_backend::models::status::ReviewStatus;

fn candidate() -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        first_name: "Abel".into(),
        last_name: "Tesfaye".into(),
        gender: "male".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1995, 4, 2).unwrap(),
        phone: "+251911000000".into(),
        email: "abel@example.com".into(),
        city: "Addis Ababa".into(),
        region: None,
        passport_number: "EP1234567".into(),
        passport_issue_date: None,
        passport_expiry_date: None,
        preferred_job: "Driver".into(),
        preferred_country: None,
        experience_years: Some(3),
        skill_housekeeping: false,
        skill_childcare: false,
        skill_elderly_care: false,
        skill_cooking: false,
        skill_driving: true,
        passport_scan_path: Some("uploads/candidates/a.pdf".into()),
        photo_path: None,
        medical_clearance_path: None,
        police_clearance_path: None,
        status: "pending".into(),
        created_at: None,
        updated_at: None,
    }
}

fn employer() -> Employer {
    Employer {
        id: Uuid::new_v4(),
        company_name: "Blue Nile Hospitality".into(),
        business_sector: "hospitality".into(),
        employee_count: Some(120),
        has_hired_before: false,
        contact_person_name: "Sara Bekele".into(),
        contact_person_title: None,
        phone: "+251911222333".into(),
        email: "hr@bluenile.example.com".into(),
        city: "Addis Ababa".into(),
        region: None,
        license_path: None,
        registration_certificate_path: None,
        contact_photo_path: None,
        status: "pending".into(),
        verified: false,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn absent_fields_are_left_untouched() {
    let mut record = candidate();
    let payload: UpdateCandidatePayload =
        serde_json::from_value(json!({ "city": "Dire Dawa" })).unwrap();
    payload.apply(&mut record);

    assert_eq!(record.city, "Dire Dawa");
    assert_eq!(record.first_name, "Abel");
    assert_eq!(record.experience_years, Some(3));
    assert_eq!(record.status, "pending");
    assert_eq!(record.passport_scan_path.as_deref(), Some("uploads/candidates/a.pdf"));
}

#[test]
fn present_fields_always_overwrite() {
    let mut record = candidate();
    let payload: UpdateCandidatePayload = serde_json::from_value(json!({
        "preferredJob": "Cook",
        "experienceYears": 7,
        "skillCooking": true,
        "skillDriving": false
    }))
    .unwrap();
    payload.apply(&mut record);

    assert_eq!(record.preferred_job, "Cook");
    assert_eq!(record.experience_years, Some(7));
    assert!(record.skill_cooking);
    assert!(!record.skill_driving);
}

#[test]
fn update_with_status_matches_the_approve_action() {
    let mut record = candidate();
    let payload: UpdateCandidatePayload =
        serde_json::from_value(json!({ "status": "approved" })).unwrap();
    payload.apply(&mut record);

    // Same end state as the dedicated approve transition
    assert_eq!(record.status, ReviewStatus::Approved.as_str());
}

#[test]
fn empty_strings_count_as_absent() {
    let mut record = candidate();
    let payload: UpdateCandidatePayload =
        serde_json::from_value(json!({ "firstName": "   ", "lastName": "" })).unwrap();
    payload.apply(&mut record);

    assert_eq!(record.first_name, "Abel");
    assert_eq!(record.last_name, "Tesfaye");
}

#[test]
fn employer_update_never_touches_the_verified_flag() {
    let mut record = employer();
    let payload: UpdateEmployerPayload = serde_json::from_value(json!({
        "companyName": "Blue Nile Hotels",
        "status": "approved"
    }))
    .unwrap();
    payload.apply(&mut record);

    assert_eq!(record.company_name, "Blue Nile Hotels");
    assert_eq!(record.status, "approved");
    assert!(!record.verified);
}

#[test]
fn wire_format_uses_camel_case_and_relative_paths() {
    let record = candidate();
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["status"], "pending");
    assert_eq!(value["firstName"], "Abel");
    assert!(value["passportScanPath"]
        .as_str()
        .unwrap()
        .starts_with("uploads/candidates/"));
    // snake_case keys must not leak into the wire format
    assert!(value.get("first_name").is_none());
}
