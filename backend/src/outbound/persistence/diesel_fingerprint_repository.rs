//! PostgreSQL-backed `FingerprintRepository` implementation using Diesel ORM.
//!
//! All statements go through Diesel's query builder, so the identifier is
//! always sent as a bound parameter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{FingerprintRepository, FingerprintRepositoryError};
use crate::domain::{FingerprintId, FingerprintRecord};

use super::models::NewFingerprintRow;
use super::pool::{DbPool, PoolError};
use super::schema::fingerprints;

/// Diesel-backed fingerprint store.
#[derive(Clone)]
pub struct DieselFingerprintRepository {
    pool: DbPool,
}

impl DieselFingerprintRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FingerprintRepositoryError {
    FingerprintRepositoryError::connection(error.message())
}

/// PostgreSQL text columns cannot hold NUL bytes.
fn contains_nul(fingerprint_id: &FingerprintId) -> bool {
    fingerprint_id.as_str().contains('\0')
}

fn reject_unstorable(fingerprint_id: &FingerprintId) -> Result<(), FingerprintRepositoryError> {
    if contains_nul(fingerprint_id) {
        return Err(FingerprintRepositoryError::query(
            "invalid byte sequence for encoding \"UTF8\": 0x00",
        ));
    }
    Ok(())
}

/// Map Diesel failures onto port errors.
///
/// A unique violation on insert becomes `Duplicate` so the registrar can
/// resolve the race; the database message is kept for other failures so the
/// caller sees why the store rejected the statement.
fn map_diesel_error(
    error: DieselError,
    fingerprint_id: &FingerprintId,
) -> FingerprintRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            FingerprintRepositoryError::duplicate(fingerprint_id.as_str())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            FingerprintRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(_, info) => FingerprintRepositoryError::query(info.message()),
        DieselError::QueryBuilderError(_) => {
            FingerprintRepositoryError::query("database query error")
        }
        _ => FingerprintRepositoryError::query("database error"),
    }
}

#[async_trait]
impl FingerprintRepository for DieselFingerprintRepository {
    async fn exists(
        &self,
        fingerprint_id: &FingerprintId,
    ) -> Result<bool, FingerprintRepositoryError> {
        // No stored row can match.
        if contains_nul(fingerprint_id) {
            return Ok(false);
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            fingerprints::table.filter(fingerprints::fingerprint_id.eq(fingerprint_id.as_str())),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, fingerprint_id))
    }

    async fn insert(&self, record: &FingerprintRecord) -> Result<(), FingerprintRepositoryError> {
        reject_unstorable(&record.fingerprint_id)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewFingerprintRow {
            fingerprint_id: record.fingerprint_id.as_str(),
            user_name: record.user_name.as_str(),
        };

        diesel::insert_into(fingerprints::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, &record.fingerprint_id))
    }
}
