//! Shared helpers for the registrar integration tests.
//!
//! Integration tests compile as separate crates, so common helpers live here
//! and are pulled in with `mod support;`.

mod cluster_skip;
mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{drop_fingerprints_table, migrate_schema, reset_database};

/// Render a `postgres` error with the SQLSTATE and server message.
///
/// The `Display` form of `postgres::Error` often collapses to `db error`,
/// which hides the cause in CI logs.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }
    summary
}
