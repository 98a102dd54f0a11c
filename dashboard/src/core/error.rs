//! # Common Error Types
//!
//! Consolidated error handling for the dashboard.
//!
//! This module provides a centralized error type [`AppError`] that covers every failure
//! the orchestrator can observe.
//!
//! ## Error Categories
//!
//! - **ProviderUnavailable**: all retry attempts against the rate provider failed
//! - **MissingRate**: the provider answered but did not quote the requested currency
//! - **InvalidAmount**: user input that cannot be converted (never reaches the network)
//! - **Config**: configuration file could not be read or parsed
//!
//! "No data for a historical date" is deliberately *not* an error: it is the `None`
//! returned by [`crate::core::service::RateService::historical_rate`].
//!
//! ## Usage Pattern
//!
//! ```rust
//! use dashboard::core::error::AppError;
//!
//! fn validate_amount(amount: f64) -> Result<f64, AppError> {
//!     if amount <= 0.0 {
//!         return Err(AppError::InvalidAmount(amount.to_string()));
//!     }
//!     Ok(amount)
//! }
//! ```

use shared::CurrencyCode;
use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use dashboard::core::error::AppError;
///
/// let err = AppError::ProviderUnavailable { attempts: 3, reason: "HTTP 503".to_string() };
/// assert_eq!(err.to_string(), "Rate provider unavailable after 3 attempts: HTTP 503");
///
/// let err = AppError::InvalidAmount("abc".to_string());
/// assert_eq!(err.to_string(), "Invalid amount: abc");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Every attempt against the rate provider failed.
    ///
    /// `reason` is the failure of the final attempt (transport error, non-2xx
    /// status, or undecodable body).
    #[error("Rate provider unavailable after {attempts} attempts: {reason}")]
    ProviderUnavailable { attempts: u32, reason: String },

    /// The provider responded successfully but without a rate for this currency.
    #[error("Provider returned no rate for {0}")]
    MissingRate(CurrencyCode),

    /// Non-positive, non-finite or unparseable amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Configuration file unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether this error came from the rate provider (as opposed to local input).
    pub fn is_provider_error(&self) -> bool {
        matches!(self, AppError::ProviderUnavailable { .. } | AppError::MissingRate(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
