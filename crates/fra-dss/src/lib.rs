//! FRA decision support: scheme eligibility for forest-rights holders,
//! village intervention ranking, and policy aggregation.

pub mod config;
pub mod dss;
pub mod error;
pub mod telemetry;
