//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! - **Thin adapter**: [`DieselFingerprintRepository`] only translates
//!   between Diesel rows and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async pooling**: connections come from a `bb8` pool through
//!   `diesel-async`.
//! - **Embedded migrations**: [`run_migrations`] creates the schema at
//!   start-up.
//!
//! # Example
//!
//! ```ignore
//! use fingerprint_registrar::outbound::persistence::{
//!     DbPool, DieselFingerprintRepository, PoolConfig,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/fingerprints")).await?;
//! let repo = DieselFingerprintRepository::new(pool);
//! ```

mod diesel_fingerprint_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_fingerprint_repository::DieselFingerprintRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
