use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::employer_dto::{NewEmployer, UpdateEmployerPayload};
use crate::error::{Error, Result};
use crate::models::employer::Employer;
use crate::models::status::ReviewStatus;
use crate::services::registry::RegistryStore;

#[derive(Clone)]
pub struct EmployerService {
    store: RegistryStore<Employer>,
}

impl EmployerService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: RegistryStore::new(pool),
        }
    }

    pub fn store(&self) -> &RegistryStore<Employer> {
        &self.store
    }

    pub async fn create(&self, new: NewEmployer) -> Result<Employer> {
        let employer = sqlx::query_as::<_, Employer>(
            r#"
            INSERT INTO employers (
                id, company_name, business_sector, employee_count, has_hired_before,
                contact_person_name, contact_person_title, phone, email, city, region,
                license_path, registration_certificate_path, contact_photo_path,
                status, verified
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    'pending', FALSE)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.company_name)
        .bind(&new.business_sector)
        .bind(new.employee_count)
        .bind(new.has_hired_before)
        .bind(&new.contact_person_name)
        .bind(&new.contact_person_title)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(&new.city)
        .bind(&new.region)
        .bind(&new.license_path)
        .bind(&new.registration_certificate_path)
        .bind(&new.contact_photo_path)
        .fetch_one(self.store.pool())
        .await?;
        Ok(employer)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateEmployerPayload,
    ) -> Result<Option<Employer>> {
        if let Some(status) = &payload.status {
            ReviewStatus::parse(status)
                .ok_or_else(|| Error::BadRequest(format!("Unknown status: {}", status)))?;
        }

        let Some(mut employer) = self.store.get(id).await? else {
            return Ok(None);
        };
        payload.apply(&mut employer);

        let updated = sqlx::query_as::<_, Employer>(
            r#"
            UPDATE employers SET
                company_name = $1, business_sector = $2, employee_count = $3,
                has_hired_before = $4, contact_person_name = $5, contact_person_title = $6,
                phone = $7, email = $8, city = $9, region = $10,
                status = $11, updated_at = NOW()
            WHERE id = $12
            RETURNING *
            "#,
        )
        .bind(&employer.company_name)
        .bind(&employer.business_sector)
        .bind(employer.employee_count)
        .bind(employer.has_hired_before)
        .bind(&employer.contact_person_name)
        .bind(&employer.contact_person_title)
        .bind(&employer.phone)
        .bind(&employer.email)
        .bind(&employer.city)
        .bind(&employer.region)
        .bind(&employer.status)
        .bind(id)
        .fetch_optional(self.store.pool())
        .await?;
        Ok(updated)
    }
}
