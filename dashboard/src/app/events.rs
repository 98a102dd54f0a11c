//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use crate::app::debounce::DebounceTicket;
use crate::app::state::{ConversionRequest, HistoricalRates};
use crate::services::api::{ConversionResult, RateSnapshot};
use shared::CurrencyCode;

/// Why a rates refresh was started; decides follow-ups and error surfacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOrigin {
    /// First refresh after the currency list loaded
    Startup,
    /// Refresh button or Ctrl+R
    Manual,
    /// Auto-refresh timer; failures are logged only
    Auto,
    /// Base currency selection changed
    BaseChange,
}

impl RefreshOrigin {
    /// Whether a failure is shown to the user as a toast.
    pub fn surfaces_errors(self) -> bool {
        !matches!(self, RefreshOrigin::Auto)
    }
}

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Provider currency list received
    CurrenciesLoaded(Result<Vec<CurrencyCode>, String>),
    /// Rates refresh finished
    RatesLoaded {
        seq: u64,
        origin: RefreshOrigin,
        result: Result<RateSnapshot, String>,
    },
    /// Main conversion finished
    ConversionDone {
        seq: u64,
        request: ConversionRequest,
        result: Result<ConversionResult, String>,
    },
    /// Quick-convert card conversion finished
    QuickConversionDone {
        index: usize,
        seq: u64,
        result: Result<ConversionResult, String>,
    },
    /// Historical card data received
    HistoricalCardLoaded { index: usize, rates: HistoricalRates },
    /// Quiet window of a debounced edit elapsed
    DebounceElapsed(DebounceTicket),
}
