//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`RateService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use dashboard::core::service::RateService;
//!
//! // In production: the HTTP client
//! let rates: Arc<dyn RateService> = Arc::new(RateClient::new(&config));
//!
//! // In tests: a scripted in-memory provider
//! let rates: Arc<dyn RateService> = Arc::new(ScriptedRates::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::RateService;
