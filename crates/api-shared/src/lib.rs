//! # API Shared
//!
//! Shared wire types for the mindgauge APIs.
//!
//! Contains:
//! - Request/response DTOs (`dto` module), serialized in the camelCase shape
//!   the dashboard consumes
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `mindgauge-run` binary for common
//! functionality.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
