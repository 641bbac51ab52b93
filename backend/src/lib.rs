//! Fingerprint registrar service library.
//!
//! Looks up sensor fingerprint identifiers and registers unseen ones with a
//! placeholder owner. The crate follows a hexagonal layout: [`domain`] holds
//! the decision logic and ports, [`outbound`] the PostgreSQL adapter, and
//! [`inbound`] the Actix Web handlers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
pub use settings::RegistrarSettings;
