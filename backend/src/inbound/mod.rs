//! Inbound adapters that translate external requests into domain calls.
//!
//! HTTP is the only transport; handlers live under [`http`].

pub mod http;
