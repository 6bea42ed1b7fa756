//! Shared utilities for configuration, errors, and HTTP access.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request setup in the auth flow. These utilities do not store
//! credentials; callers must still avoid logging sensitive data.

pub mod api;
pub mod config;
pub mod errors;

pub use api::HttpGateway;
pub use config::AppConfig;
pub use errors::AppError;
