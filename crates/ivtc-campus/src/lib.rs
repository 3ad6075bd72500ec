//! Domain crate for the IVTC campus portal backend.
//!
//! Carries the two interactive workflows behind the public site, credential
//! verification and student registration intake, together with the shared
//! configuration, telemetry, and error plumbing used by the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
