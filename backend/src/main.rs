//! Fingerprint registrar entry-point: loads settings, prepares the store and
//! serves the HTTP API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fingerprint_registrar::RegistrarSettings;
use fingerprint_registrar::inbound::http::health::HealthState;
use fingerprint_registrar::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = RegistrarSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations() {
            apply_migrations(database_url).await?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url)
                .with_max_size(settings.db_max_connections())
                .with_connection_timeout(settings.db_connect_timeout()),
        )
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

async fn apply_migrations(database_url: &str) -> std::io::Result<()> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_migrations(&url))
        .await
        .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!(applied, "database migrations applied");
    Ok(())
}
