//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! port, so they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::FingerprintRegistrar;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registrar: Arc<dyn FingerprintRegistrar>,
}

impl HttpState {
    /// Build state around a registrar implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use fingerprint_registrar::domain::FingerprintRegistrarService;
    /// use fingerprint_registrar::domain::ports::FixtureFingerprintRepository;
    /// use fingerprint_registrar::inbound::http::state::HttpState;
    ///
    /// let service = FingerprintRegistrarService::new(Arc::new(FixtureFingerprintRepository));
    /// let state = HttpState::new(Arc::new(service));
    /// let _registrar = state.registrar.clone();
    /// ```
    pub fn new(registrar: Arc<dyn FingerprintRegistrar>) -> Self {
        Self { registrar }
    }
}
