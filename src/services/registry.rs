use std::marker::PhantomData;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::agency::Agency;
use crate::models::candidate::Candidate;
use crate::models::employer::Employer;
use crate::models::status::ReviewStatus;

/// A record type managed by the shared registration lifecycle. `TABLE` must
/// be a fixed identifier, never derived from user input.
pub trait RegistryRecord: for<'r> FromRow<'r, PgRow> + Unpin + Send + Sync {
    const TABLE: &'static str;
}

/// Record types carrying the `verified` flag alongside `status`.
pub trait VerifiableRecord: RegistryRecord {}

impl RegistryRecord for Candidate {
    const TABLE: &'static str = "candidates";
}

impl RegistryRecord for Employer {
    const TABLE: &'static str = "employers";
}

impl RegistryRecord for Agency {
    const TABLE: &'static str = "agencies";
}

impl VerifiableRecord for Employer {}
impl VerifiableRecord for Agency {}

/// The lifecycle shared by all three record types: list, lookup, status
/// transition, verification and hard delete. Creation and partial update are
/// field-specific and live in the per-entity services.
#[derive(Debug)]
pub struct RegistryStore<R> {
    pool: PgPool,
    _record: PhantomData<R>,
}

impl<R> Clone for RegistryStore<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: RegistryRecord> RegistryStore<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Every record, newest first. No pagination or server-side filtering;
    /// consumers filter what they fetched.
    pub async fn list(&self) -> Result<Vec<R>> {
        let sql = format!("SELECT * FROM {} ORDER BY created_at DESC", R::TABLE);
        let records = sqlx::query_as::<_, R>(&sql).fetch_all(&self.pool).await?;
        Ok(records)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<R>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", R::TABLE);
        let record = sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    /// Sets the literal target status. No transition table: re-approving an
    /// approved record is accepted silently. Returns None on a missing id.
    pub async fn set_status(&self, id: Uuid, status: ReviewStatus) -> Result<Option<R>> {
        let sql = format!(
            "UPDATE {} SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
            R::TABLE
        );
        let record = sqlx::query_as::<_, R>(&sql)
            .bind(status.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    /// True when a row was actually removed. Uploaded files referenced by the
    /// record stay on disk.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", R::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

impl<R: VerifiableRecord> RegistryStore<R> {
    pub async fn set_verified(&self, id: Uuid, verified: bool) -> Result<Option<R>> {
        let sql = format!(
            "UPDATE {} SET verified = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
            R::TABLE
        );
        let record = sqlx::query_as::<_, R>(&sql)
            .bind(verified)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }
}
