//! Infrastructure Services
//!
//! This module provides the supporting services for the registration form:
//!
//! - **config**: Rule constants and their validation
//! - **errors**: Common error types and handling utilities
//! - **submission**: Sinks that receive a validated registration payload
//!
//! Nothing here performs network or storage I/O; the form is fully client-side.

pub mod config;
pub mod errors;
pub mod submission;
