//! # Shared Currency Data Library
//!
//! Static currency reference data, the wire contract of the exchange-rate
//! provider, and the pure formatting helpers used by the dashboard.
//!
//! ## Structure
//!
//! - **[`currency`]**: Currency Directory (codes, display metadata, priority tiers, trading pairs)
//! - **[`dto`]**: Data Transfer Objects for the rate provider's JSON responses
//!   - **[`dto::rates`]**: Latest, pairwise and historical rate payloads
//! - **[`utils`]**: Number, money and percentage formatting
//!
//! ## Wire Format
//!
//! The provider speaks plain JSON:
//! - Rate payloads are `{ amount?, base, date, rates: { CODE: number } }`
//! - The currency list is a flat `{ CODE: "Display Name" }` object
//! - Unknown fields are ignored so provider additions never break decoding
//!
//! ## Usage
//!
//! ```rust
//! use shared::currency::{lookup, CurrencyCode, Priority};
//! use shared::utils::format_money;
//!
//! let usd = lookup(&CurrencyCode::from("USD"));
//! assert_eq!(usd.priority, Priority::Major);
//! assert_eq!(format_money(12.5, &usd.code), "$12.50");
//! ```

pub mod currency;
pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use currency::{CurrencyCode, CurrencyMeta, Priority, TradingPair};
pub use dto::*;
pub use utils::*;
