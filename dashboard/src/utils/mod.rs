//! # Utility Functions
//!
//! Shared utility functions used across the dashboard.
//!
//! ## Modules
//!
//! - **[`runtime`]**: Process-wide tokio runtime for the egui thread
//! - **[`validation`]**: Amount parsing and inline validation hints
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate number and change formatting
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
