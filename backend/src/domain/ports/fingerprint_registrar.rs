//! Driving port for the lookup-or-register use case.

use async_trait::async_trait;

use crate::domain::{Error, FingerprintId};

/// Result of a single lookup-or-register request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// No identifier was supplied; the store was not consulted.
    NoData,
    /// The identifier is already known.
    Authorized,
    /// The identifier was unseen and has been recorded with a placeholder
    /// owner.
    PendingCreated,
    /// The identifier was unseen but recording it failed.
    InsertFailed { detail: String },
}

/// Check a fingerprint against the store, registering it when unseen.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FingerprintRegistrar: Send + Sync {
    /// Decide the outcome for `fingerprint_id`.
    ///
    /// Insert failures are reported through
    /// [`RegistrationOutcome::InsertFailed`]. `Err` is reserved for a lookup
    /// that could not be performed.
    async fn check_or_register(
        &self,
        fingerprint_id: Option<FingerprintId>,
    ) -> Result<RegistrationOutcome, Error>;
}
