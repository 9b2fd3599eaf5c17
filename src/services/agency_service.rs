use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::agency_dto::{NewAgency, UpdateAgencyPayload};
use crate::error::{Error, Result};
use crate::models::agency::Agency;
use crate::models::status::ReviewStatus;
use crate::services::registry::RegistryStore;

#[derive(Clone)]
pub struct AgencyService {
    store: RegistryStore<Agency>,
}

impl AgencyService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: RegistryStore::new(pool),
        }
    }

    pub fn store(&self) -> &RegistryStore<Agency> {
        &self.store
    }

    pub async fn create(&self, new: NewAgency) -> Result<Agency> {
        let agency = sqlx::query_as::<_, Agency>(
            r#"
            INSERT INTO agencies (
                id, agency_name, license_number, director_name, director_phone,
                phone, email, city, region, recruiter_count, services_offered,
                license_path, registration_certificate_path, director_photo_path,
                status, verified
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    'pending', FALSE)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.agency_name)
        .bind(&new.license_number)
        .bind(&new.director_name)
        .bind(&new.director_phone)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(&new.city)
        .bind(&new.region)
        .bind(new.recruiter_count)
        .bind(&new.services_offered)
        .bind(&new.license_path)
        .bind(&new.registration_certificate_path)
        .bind(&new.director_photo_path)
        .fetch_one(self.store.pool())
        .await?;
        Ok(agency)
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateAgencyPayload) -> Result<Option<Agency>> {
        if let Some(status) = &payload.status {
            ReviewStatus::parse(status)
                .ok_or_else(|| Error::BadRequest(format!("Unknown status: {}", status)))?;
        }

        let Some(mut agency) = self.store.get(id).await? else {
            return Ok(None);
        };
        payload.apply(&mut agency);

        let updated = sqlx::query_as::<_, Agency>(
            r#"
            UPDATE agencies SET
                agency_name = $1, license_number = $2, director_name = $3,
                director_phone = $4, phone = $5, email = $6, city = $7, region = $8,
                recruiter_count = $9, services_offered = $10,
                status = $11, updated_at = NOW()
            WHERE id = $12
            RETURNING *
            "#,
        )
        .bind(&agency.agency_name)
        .bind(&agency.license_number)
        .bind(&agency.director_name)
        .bind(&agency.director_phone)
        .bind(&agency.phone)
        .bind(&agency.email)
        .bind(&agency.city)
        .bind(&agency.region)
        .bind(agency.recruiter_count)
        .bind(&agency.services_offered)
        .bind(&agency.status)
        .bind(id)
        .fetch_optional(self.store.pool())
        .await?;
        Ok(updated)
    }
}
