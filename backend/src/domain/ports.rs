//! Domain ports defining the edges of the hexagon.
//!
//! The registrar drives a single outbound port, the fingerprint store, and
//! is itself exposed to inbound adapters through a driving port. Port errors
//! are strongly typed so adapters translate their failures into predictable
//! variants.

mod fingerprint_registrar;
mod fingerprint_repository;
mod macros;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use fingerprint_registrar::MockFingerprintRegistrar;
pub use fingerprint_registrar::{FingerprintRegistrar, RegistrationOutcome};
#[cfg(test)]
pub use fingerprint_repository::MockFingerprintRepository;
pub use fingerprint_repository::{
    FingerprintRepository, FingerprintRepositoryError, FixtureFingerprintRepository,
};
