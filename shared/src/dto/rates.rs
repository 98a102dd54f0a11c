use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Rate payload returned by `/latest` and `/<date>` queries.
///
/// `amount` is only present on pairwise conversions; `rates` then holds the
/// converted amount rather than a unit rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl RatesResponse {
    /// Rate (or converted amount) quoted for `code`, if the provider sent one.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied().filter(|v| v.is_finite())
    }
}

/// `/currencies` payload: code to human-readable name.
pub type CurrencyListResponse = BTreeMap<String, String>;
