//! Contact role classification and MEDDIC lead scoring for account-based
//! marketing research.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
pub mod workflows;
