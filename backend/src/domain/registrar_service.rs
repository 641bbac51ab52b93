//! Fingerprint registrar domain service.
//!
//! Implements the lookup-or-register decision: an absent identifier is
//! reported as no data, a known identifier is authorised, and an unseen one
//! is recorded with a placeholder owner.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    FingerprintRegistrar, FingerprintRepository, FingerprintRepositoryError, RegistrationOutcome,
};
use crate::domain::{Error, FingerprintId, FingerprintRecord};

/// Registrar service backed by an injected fingerprint store.
#[derive(Clone)]
pub struct FingerprintRegistrarService<R> {
    repository: Arc<R>,
}

impl<R> FingerprintRegistrarService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> FingerprintRegistrarService<R>
where
    R: FingerprintRepository,
{
    fn map_lookup_error(error: FingerprintRepositoryError) -> Error {
        match error {
            FingerprintRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("fingerprint store unavailable: {message}"))
            }
            FingerprintRepositoryError::Query { message } => {
                Error::internal(format!("fingerprint lookup failed: {message}"))
            }
            FingerprintRepositoryError::Duplicate { fingerprint_id } => Error::internal(format!(
                "unexpected duplicate reported during lookup of {fingerprint_id}"
            )),
        }
    }

    async fn register(&self, fingerprint_id: FingerprintId) -> RegistrationOutcome {
        let record = FingerprintRecord::pending(fingerprint_id);
        match self.repository.insert(&record).await {
            Ok(()) => {
                info!(
                    fingerprint_id = %record.fingerprint_id,
                    user_name = %record.user_name,
                    "registered new fingerprint; authorisation pending"
                );
                RegistrationOutcome::PendingCreated
            }
            // Lost a race with a concurrent request for the same identifier.
            Err(FingerprintRepositoryError::Duplicate { .. }) => {
                debug!(
                    fingerprint_id = %record.fingerprint_id,
                    "fingerprint registered concurrently"
                );
                RegistrationOutcome::Authorized
            }
            Err(err) => {
                warn!(
                    fingerprint_id = %record.fingerprint_id,
                    error = %err,
                    "failed to register fingerprint"
                );
                RegistrationOutcome::InsertFailed {
                    detail: store_detail(err),
                }
            }
        }
    }
}

/// The store's own message, without the port error's prefix.
fn store_detail(err: FingerprintRepositoryError) -> String {
    match err {
        FingerprintRepositoryError::Connection { message }
        | FingerprintRepositoryError::Query { message } => message,
        other => other.to_string(),
    }
}

#[async_trait]
impl<R> FingerprintRegistrar for FingerprintRegistrarService<R>
where
    R: FingerprintRepository,
{
    async fn check_or_register(
        &self,
        fingerprint_id: Option<FingerprintId>,
    ) -> Result<RegistrationOutcome, Error> {
        let Some(fingerprint_id) = fingerprint_id else {
            return Ok(RegistrationOutcome::NoData);
        };

        let known = self
            .repository
            .exists(&fingerprint_id)
            .await
            .map_err(|err| {
                error!(
                    fingerprint_id = %fingerprint_id,
                    error = %err,
                    "fingerprint lookup failed"
                );
                Self::map_lookup_error(err)
            })?;

        if known {
            debug!(fingerprint_id = %fingerprint_id, "fingerprint authorised");
            return Ok(RegistrationOutcome::Authorized);
        }

        Ok(self.register(fingerprint_id).await)
    }
}

#[cfg(test)]
#[path = "registrar_service_tests.rs"]
mod tests;
