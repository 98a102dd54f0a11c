//! # Data Transfer Objects (DTOs)
//!
//! Structures decoded from the exchange-rate provider's REST API.
//!
//! ## Module Organization
//!
//! - [`rates`] - Latest, pairwise-conversion and historical rate payloads, currency list
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: lowercase, identical to the provider
//! - **Optional fields**: `#[serde(default)]` so partial payloads still decode
//! - **Unknown fields**: ignored
//!
//! ## Example JSON
//!
//! ```text
//! GET /latest?amount=100&from=USD&to=TRY
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "amount": 100.0,
//!   "base": "USD",
//!   "date": "2024-05-17",
//!   "rates": { "TRY": 3221.5 }
//! }
//! ```

pub mod rates;

pub use rates::*;
