//! Domain types and services for fingerprint registration.
//!
//! Public surface:
//! - [`FingerprintId`] and [`FingerprintRecord`]: the identifier and the
//!   record stored for it.
//! - [`FingerprintRegistrarService`]: the lookup-or-register use case.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`TraceId`]: request correlation identifier.
//! - [`ports`]: traits adapters implement or drive.

pub mod error;
pub mod fingerprint;
pub mod ports;
pub mod registrar_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::fingerprint::{FingerprintId, FingerprintRecord, UNKNOWN_USER};
pub use self::registrar_service::FingerprintRegistrarService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
