//! Eligibility and personalization engine for engineering college
//! admissions, plus the service scaffolding that exposes it.

pub mod account;
pub mod config;
pub mod error;
pub mod predictor;
pub mod session;
pub mod telemetry;
