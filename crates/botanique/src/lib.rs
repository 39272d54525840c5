//! Landscaping plant recommendations for East African growing conditions.
//!
//! The [`recommendations`] module holds the suitability scoring engine and the
//! ranking step that turns a candidate list into a top-N report. Configuration,
//! error plumbing and telemetry sit alongside it so the service binary stays thin.

pub mod config;
pub mod error;
pub mod recommendations;
pub mod telemetry;
