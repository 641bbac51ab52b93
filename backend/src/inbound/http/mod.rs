//! HTTP inbound adapter.

pub mod error;
pub mod fingerprints;
pub mod health;
pub mod state;

pub use error::ApiResult;
