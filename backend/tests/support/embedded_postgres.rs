//! Database lifecycle helpers for the embedded PostgreSQL cluster.
//!
//! Resets go through the `postgres` client so `DROP DATABASE` runs outside
//! a transaction. Schema setup uses the crate's own migration runner so the
//! tests exercise the same path as start-up.

use fingerprint_registrar::outbound::persistence::run_migrations;
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

use super::format_postgres_error;

const ADMIN_DB: &str = "postgres";

/// Drop and recreate `name` on the cluster.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url(ADMIN_DB);
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    // Each statement must run on its own; neither may sit in a transaction.
    client
        .batch_execute(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))
}

/// Apply the embedded migrations to the database at `url`.
pub fn migrate_schema(url: &str) -> Result<usize, String> {
    run_migrations(url).map_err(|err| err.to_string())
}

/// Remove the `fingerprints` table to simulate a broken schema.
pub fn drop_fingerprints_table(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute("DROP TABLE IF EXISTS fingerprints;")
        .map_err(|err| format_postgres_error(&err))
}
