//! Internal Diesel row structs.
//!
//! Never exposed to the domain; adapters convert to and from domain types.

use diesel::prelude::*;

use super::schema::fingerprints;

/// Insertable row for a newly seen fingerprint. `created_at` is filled in by
/// the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = fingerprints)]
pub(crate) struct NewFingerprintRow<'a> {
    pub fingerprint_id: &'a str,
    pub user_name: &'a str,
}
