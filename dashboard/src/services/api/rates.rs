//! # Rate Endpoints
//!
//! Currency list, latest rates, pairwise conversion and historical rates.

use super::client::RateClient;
use crate::core::error::{AppError, Result};
use chrono::{DateTime, Local, NaiveDate};
use shared::dto::{CurrencyListResponse, RatesResponse};
use shared::CurrencyCode;
use std::collections::{BTreeMap, HashMap};

/// Get the provider's currency list (code to display name).
#[tracing::instrument(skip(client))]
pub async fn list_currencies(client: &RateClient) -> Result<BTreeMap<CurrencyCode, String>> {
    let url = format!("{}/currencies", client.base_url());
    let list: CurrencyListResponse = client.get_json(&url).await?;

    tracing::debug!(count = list.len(), "Currency list fetched");
    Ok(list.into_iter().map(|(code, name)| (CurrencyCode::from(code), name)).collect())
}

/// Get all rates quoted against `base`.
#[tracing::instrument(skip(client), fields(base = %base))]
pub async fn latest_rates(client: &RateClient, base: &CurrencyCode) -> Result<RateSnapshot> {
    let url = format!("{}/latest?from={}", client.base_url(), base);
    let response: RatesResponse = client.get_json(&url).await?;

    let rates = response
        .rates
        .into_iter()
        .filter(|(_, rate)| rate.is_finite())
        .map(|(code, rate)| (CurrencyCode::from(code), rate))
        .collect();

    let snapshot = RateSnapshot::new(base.clone(), rates, Local::now());
    tracing::debug!(rate_count = snapshot.len(), "Latest rates fetched");
    Ok(snapshot)
}

/// Convert `amount` of `from` into `to`.
///
/// Same-currency requests are answered locally without touching the network.
#[tracing::instrument(skip(client), fields(from = %from, to = %to))]
pub async fn convert(client: &RateClient, from: &CurrencyCode, to: &CurrencyCode, amount: f64) -> Result<ConversionResult> {
    if from == to {
        return Ok(ConversionResult::identity(amount));
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::InvalidAmount(amount.to_string()));
    }

    let url = format!("{}/latest?amount={}&from={}&to={}", client.base_url(), amount, from, to);
    let response: RatesResponse = client.get_json(&url).await?;

    let converted = response
        .rate_for(to.as_str())
        .ok_or_else(|| AppError::MissingRate(to.clone()))?;

    Ok(ConversionResult {
        converted_amount: converted,
        effective_rate: converted / amount,
    })
}

/// Get the rate of `from` in `to` on `date`.
///
/// Returns `None` instead of an error when the provider has nothing for that
/// date or pair, so one missing period never fails a whole card.
#[tracing::instrument(skip(client), fields(from = %from, to = %to, date = %date))]
pub async fn historical_rate(client: &RateClient, from: &CurrencyCode, to: &CurrencyCode, date: NaiveDate) -> Option<f64> {
    if from == to {
        return Some(1.0);
    }

    let url = format!("{}/{}?from={}&to={}", client.base_url(), date.format("%Y-%m-%d"), from, to);
    match client.get_json::<RatesResponse>(&url).await {
        Ok(response) => {
            let rate = response.rate_for(to.as_str());
            if rate.is_none() {
                tracing::debug!("No historical rate in provider response");
            }
            rate
        }
        Err(e) => {
            tracing::debug!(error = %e, "Historical rate unavailable");
            None
        }
    }
}

// ==================== RATE DATA TYPES ====================

/// Immutable, timestamped set of rates relative to one base currency.
///
/// The base always maps to exactly `1.0`, whether or not the provider sent it.
/// A snapshot is replaced wholesale on refresh and never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    base: CurrencyCode,
    rates: HashMap<CurrencyCode, f64>,
    fetched_at: DateTime<Local>,
}

impl RateSnapshot {
    pub fn new(base: CurrencyCode, mut rates: HashMap<CurrencyCode, f64>, fetched_at: DateTime<Local>) -> Self {
        rates.insert(base.clone(), 1.0);
        Self { base, rates, fetched_at }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Units of `code` per one unit of the base.
    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn fetched_at(&self) -> DateTime<Local> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Outcome of one conversion request. Derived per request, never stored as truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub converted_amount: f64,
    pub effective_rate: f64,
}

impl ConversionResult {
    /// Result of converting a currency into itself.
    pub fn identity(amount: f64) -> Self {
        Self {
            converted_amount: amount,
            effective_rate: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_synthesizes_base_rate() {
        let mut rates = HashMap::new();
        rates.insert(CurrencyCode::from("EUR"), 0.92);
        let snapshot = RateSnapshot::new(CurrencyCode::from("USD"), rates, Local::now());

        assert_eq!(snapshot.rate(&CurrencyCode::from("USD")), Some(1.0));
        assert_eq!(snapshot.rate(&CurrencyCode::from("EUR")), Some(0.92));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_snapshot_overrides_provider_base_rate() {
        let mut rates = HashMap::new();
        rates.insert(CurrencyCode::from("USD"), 0.9999);
        let snapshot = RateSnapshot::new(CurrencyCode::from("USD"), rates, Local::now());

        assert_eq!(snapshot.rate(snapshot.base()), Some(1.0));
    }

    #[test]
    fn test_identity_conversion() {
        let result = ConversionResult::identity(250.0);
        assert_eq!(result.converted_amount, 250.0);
        assert_eq!(result.effective_rate, 1.0);
    }
}
