//! staffing-core — capacity dimensioning for call-center staffing.
//!
//! The estimator turns per-interval call-volume observations into a
//! staffing plan: required headcount, achieved utilization, and a
//! health status per interval, under two calendar regimes (Weekday
//! and Saturday). Everything is pure and synchronous; ingestion and
//! presentation belong to the caller.

pub mod coverage;
pub mod demand;
pub mod dimensioning;
pub mod error;
pub mod observation;
pub mod regime;
pub mod status;
pub mod types;
