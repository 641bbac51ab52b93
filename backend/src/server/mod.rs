//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use fingerprint_registrar::Trace;
#[cfg(debug_assertions)]
use fingerprint_registrar::doc::ApiDoc;
use fingerprint_registrar::domain::FingerprintRegistrarService;
use fingerprint_registrar::domain::ports::{FingerprintRegistrar, FixtureFingerprintRepository};
use fingerprint_registrar::inbound::http::fingerprints;
use fingerprint_registrar::inbound::http::health::{HealthState, live, ready};
use fingerprint_registrar::inbound::http::state::HttpState;
use fingerprint_registrar::outbound::persistence::DieselFingerprintRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the registrar over the database when a pool is configured,
/// otherwise over the fixture repository.
fn build_registrar(config: &ServerConfig) -> Arc<dyn FingerprintRegistrar> {
    match &config.db_pool {
        Some(pool) => {
            info!("fingerprint store: postgres");
            Arc::new(FingerprintRegistrarService::new(Arc::new(
                DieselFingerprintRepository::new(pool.clone()),
            )))
        }
        None => {
            warn!("no database configured; fingerprint store is the fixture repository");
            Arc::new(FingerprintRegistrarService::new(Arc::new(
                FixtureFingerprintRepository,
            )))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(fingerprints::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::new(build_registrar(&config)));
    let ServerConfig {
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
