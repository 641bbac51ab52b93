//! Port for fingerprint record persistence.
//!
//! [`FingerprintRepository`] is the store the registrar consults and writes
//! to. Adapters map their native failures into
//! [`FingerprintRepositoryError`] so the domain can tell an unreachable store
//! from a rejected write.

use async_trait::async_trait;

use crate::domain::{FingerprintId, FingerprintRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by fingerprint repository adapters.
    pub enum FingerprintRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "fingerprint repository connection failed: {message}",
        /// A query or insert failed during execution.
        Query { message: String } =>
            "fingerprint repository query failed: {message}",
        /// A record with this identifier already exists.
        Duplicate { fingerprint_id: String } =>
            "fingerprint {fingerprint_id} is already registered",
    }
}

/// Point lookup and insert over stored fingerprint records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FingerprintRepository: Send + Sync {
    /// Whether at least one record matches `fingerprint_id` exactly.
    async fn exists(&self, fingerprint_id: &FingerprintId)
    -> Result<bool, FingerprintRepositoryError>;

    /// Store a new record.
    ///
    /// Returns [`FingerprintRepositoryError::Duplicate`] when the store
    /// enforces uniqueness and the identifier is already present.
    async fn insert(&self, record: &FingerprintRecord) -> Result<(), FingerprintRepositoryError>;
}

/// Fixture used when no database is configured.
///
/// Every identifier looks unseen and inserts are discarded, so each request
/// reports a pending registration.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFingerprintRepository;

#[async_trait]
impl FingerprintRepository for FixtureFingerprintRepository {
    async fn exists(
        &self,
        _fingerprint_id: &FingerprintId,
    ) -> Result<bool, FingerprintRepositoryError> {
        Ok(false)
    }

    async fn insert(&self, _record: &FingerprintRecord) -> Result<(), FingerprintRepositoryError> {
        Ok(())
    }
}
