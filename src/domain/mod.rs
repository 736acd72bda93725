//! Core domain types and logic.

pub mod record;
pub mod schema;
pub mod range;
pub mod metrics;
pub mod analysis;
pub mod cleaning;
pub mod config_validation;
pub mod error;
