//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`. Regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Fingerprint identifiers seen by sensors.
    ///
    /// `fingerprint_id` is the primary key, so concurrent first sightings of
    /// the same identifier cannot create duplicate rows.
    fingerprints (fingerprint_id) {
        /// Identifier reported by the sensor (max 255 characters).
        fingerprint_id -> Varchar,
        /// Owner name; `Unknown User` until an administrator assigns one.
        user_name -> Varchar,
        /// First-sighting timestamp.
        created_at -> Timestamptz,
    }
}
