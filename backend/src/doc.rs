//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the fingerprint endpoint, the health checks and the
//! JSON error envelope. The document is served by Swagger UI in debug builds
//! and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fingerprint registrar API",
        description = "Lookup-or-register endpoint for sensor fingerprint IDs, plus health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::fingerprints::check_fingerprint,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Error, ErrorCode)),
    tags(
        (name = "fingerprints", description = "Fingerprint lookup and registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
