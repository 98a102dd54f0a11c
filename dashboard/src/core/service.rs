//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::Result;
use crate::services::api::{ConversionResult, RateSnapshot};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::CurrencyCode;
use std::collections::BTreeMap;

/// Trait for exchange-rate provider operations.
///
/// The orchestrator only ever holds an `Arc<dyn RateService>`; production wires in
/// [`crate::services::api::RateClient`], tests wire in scripted implementations.
#[async_trait]
pub trait RateService: Send + Sync {
    /// Currency code to display name, as published by the provider.
    async fn list_currencies(&self) -> Result<BTreeMap<CurrencyCode, String>>;

    /// Fresh snapshot of all rates quoted against `base`.
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateSnapshot>;

    /// Convert `amount` of `from` into `to`.
    ///
    /// Implementations must answer `from == to` locally with a unit rate.
    async fn convert(&self, from: &CurrencyCode, to: &CurrencyCode, amount: f64) -> Result<ConversionResult>;

    /// Rate of `from` in `to` on `date`; `None` when the provider has no data.
    async fn historical_rate(&self, from: &CurrencyCode, to: &CurrencyCode, date: NaiveDate) -> Option<f64>;
}
