//! # Rate Provider Client Module
//!
//! HTTP client for the public exchange-rate REST service.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - RateClient, retry policy, RateService impl
//! └── rates.rs    - Endpoints (currencies, latest, convert, historical) and rate types
//! ```
//!
//! ## Endpoints
//!
//! ```text
//! GET /currencies                          -> { CODE: "Name", ... }
//! GET /latest?from=BASE                    -> { base, date, rates }
//! GET /latest?amount=A&from=F&to=T         -> { amount, base, date, rates: { T: converted } }
//! GET /YYYY-MM-DD?from=F&to=T              -> { base, date, rates: { T: rate } }
//! ```

pub mod client;
pub mod rates;

pub use client::{RateClient, RetryPolicy};
pub use rates::{ConversionResult, RateSnapshot};
