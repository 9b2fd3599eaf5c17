use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::candidate_dto::{NewCandidate, UpdateCandidatePayload};
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::status::ReviewStatus;
use crate::services::registry::RegistryStore;

#[derive(Clone)]
pub struct CandidateService {
    store: RegistryStore<Candidate>,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: RegistryStore::new(pool),
        }
    }

    pub fn store(&self) -> &RegistryStore<Candidate> {
        &self.store
    }

    pub async fn create(&self, new: NewCandidate) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (
                id, first_name, last_name, gender, date_of_birth, phone, email,
                city, region, passport_number, passport_issue_date, passport_expiry_date,
                preferred_job, preferred_country, experience_years,
                skill_housekeeping, skill_childcare, skill_elderly_care, skill_cooking, skill_driving,
                passport_scan_path, photo_path, medical_clearance_path, police_clearance_path,
                status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                    $16, $17, $18, $19, $20, $21, $22, $23, $24, 'pending')
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.gender)
        .bind(new.date_of_birth)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(&new.city)
        .bind(&new.region)
        .bind(&new.passport_number)
        .bind(new.passport_issue_date)
        .bind(new.passport_expiry_date)
        .bind(&new.preferred_job)
        .bind(&new.preferred_country)
        .bind(new.experience_years)
        .bind(new.skill_housekeeping)
        .bind(new.skill_childcare)
        .bind(new.skill_elderly_care)
        .bind(new.skill_cooking)
        .bind(new.skill_driving)
        .bind(&new.passport_scan_path)
        .bind(&new.photo_path)
        .bind(&new.medical_clearance_path)
        .bind(&new.police_clearance_path)
        .fetch_one(self.store.pool())
        .await?;
        Ok(candidate)
    }

    /// Object-assign partial update: fetch, overlay the payload, persist the
    /// merged row. Returns None when the id does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateCandidatePayload,
    ) -> Result<Option<Candidate>> {
        if let Some(status) = &payload.status {
            ReviewStatus::parse(status)
                .ok_or_else(|| Error::BadRequest(format!("Unknown status: {}", status)))?;
        }

        let Some(mut candidate) = self.store.get(id).await? else {
            return Ok(None);
        };
        payload.apply(&mut candidate);

        let updated = sqlx::query_as::<_, Candidate>(
            r#"
            UPDATE candidates SET
                first_name = $1, last_name = $2, gender = $3, date_of_birth = $4,
                phone = $5, email = $6, city = $7, region = $8,
                passport_number = $9, passport_issue_date = $10, passport_expiry_date = $11,
                preferred_job = $12, preferred_country = $13, experience_years = $14,
                skill_housekeeping = $15, skill_childcare = $16, skill_elderly_care = $17,
                skill_cooking = $18, skill_driving = $19,
                status = $20, updated_at = NOW()
            WHERE id = $21
            RETURNING *
            "#,
        )
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.gender)
        .bind(candidate.date_of_birth)
        .bind(&candidate.phone)
        .bind(&candidate.email)
        .bind(&candidate.city)
        .bind(&candidate.region)
        .bind(&candidate.passport_number)
        .bind(candidate.passport_issue_date)
        .bind(candidate.passport_expiry_date)
        .bind(&candidate.preferred_job)
        .bind(&candidate.preferred_country)
        .bind(candidate.experience_years)
        .bind(candidate.skill_housekeeping)
        .bind(candidate.skill_childcare)
        .bind(candidate.skill_elderly_care)
        .bind(candidate.skill_cooking)
        .bind(candidate.skill_driving)
        .bind(&candidate.status)
        .bind(id)
        .fetch_optional(self.store.pool())
        .await?;
        Ok(updated)
    }
}
