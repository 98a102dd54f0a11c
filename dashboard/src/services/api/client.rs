//! # Rate Client
//!
//! HTTP client for the exchange-rate provider, with bounded retry.

use crate::config::DashboardConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::RateService;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::CurrencyCode;
use std::collections::BTreeMap;
use std::time::Duration;

use super::rates::{ConversionResult, RateSnapshot};

/// Retry schedule for provider calls.
///
/// Attempt `i` (1-based) that fails waits `i * backoff_step` before attempt `i + 1`.
/// The failure of the final attempt is returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after failed attempt number `attempt`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }
}

/// HTTP client for the rate provider.
///
/// Holds one pooled `reqwest::Client`; cloning the surrounding `Arc` is the way to
/// share it between tasks.
pub struct RateClient {
    pub(crate) client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl RateClient {
    /// Create a client from the dashboard configuration.
    pub fn new(config: &DashboardConfig) -> Self {
        let retry = RetryPolicy {
            max_attempts: config.max_attempts,
            backoff_step: config.backoff_step(),
        };
        Self::with_base_url(&config.api_base_url, config.request_timeout(), retry)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: &str, timeout: Duration, retry: RetryPolicy) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry,
        }
    }

    /// Get the base URL for provider requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode JSON, retrying per the client's [`RetryPolicy`].
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.fetch_once::<T>(url, attempt).await {
                Ok(value) => return Ok(value),
                Err(reason) if attempt >= attempts => {
                    tracing::warn!(url = %url, attempts = attempts, error = %reason, "Provider call failed, retries exhausted");
                    return Err(AppError::ProviderUnavailable { attempts, reason });
                }
                Err(reason) => {
                    let delay = self.retry.delay_after(attempt);
                    tracing::debug!(
                        url = %url,
                        attempt = attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %reason,
                        "Provider call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn fetch_once<T: DeserializeOwned>(&self, url: &str, attempt: u32) -> std::result::Result<T, String> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        tracing::debug!(
            url = %url,
            attempt = attempt,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Provider call succeeded"
        );
        Ok(body)
    }
}

#[async_trait::async_trait]
impl RateService for RateClient {
    async fn list_currencies(&self) -> Result<BTreeMap<CurrencyCode, String>> {
        super::rates::list_currencies(self).await
    }

    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateSnapshot> {
        super::rates::latest_rates(self, base).await
    }

    async fn convert(&self, from: &CurrencyCode, to: &CurrencyCode, amount: f64) -> Result<ConversionResult> {
        super::rates::convert(self, from, to, amount).await
    }

    async fn historical_rate(&self, from: &CurrencyCode, to: &CurrencyCode, date: NaiveDate) -> Option<f64> {
        super::rates::historical_rate(self, from, to, date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_backoff() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_after(2), Duration::from_millis(2000));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = RateClient::with_base_url("http://localhost:9000/", Duration::from_secs(1), RetryPolicy::default());
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_client_from_config() {
        let config = DashboardConfig {
            max_attempts: 5,
            backoff_step_ms: 10,
            ..DashboardConfig::default()
        };
        let client = RateClient::new(&config);
        assert_eq!(client.retry.max_attempts, 5);
        assert_eq!(client.retry.backoff_step, Duration::from_millis(10));
        assert_eq!(client.base_url(), "https://api.frankfurter.app");
    }
}
