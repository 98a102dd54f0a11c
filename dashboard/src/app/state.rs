//! # Application State
//!
//! State types for the dashboard, shared between the UI thread and background
//! tasks behind `Arc<RwLock<AppState>>`.
//!
//! [`AppState`] is the single process-wide record: selected currencies, the latest
//! [`RateSnapshot`], the loading flag and the view models the orchestrator keeps
//! current (conversion result, quick-convert cards, historical cards).

use crate::config::DashboardConfig;
use crate::services::api::{ConversionResult, RateSnapshot};
use chrono::{DateTime, Local};
use shared::currency::{lookup, popular_pairs, historical_pairs, priority_of, CurrencyMeta, TradingPair};
use shared::utils::{format_number, percent_change, PLACEHOLDER};
use shared::CurrencyCode;

/// Maximum number of cells in the rates grid.
pub const RATE_GRID_SIZE: usize = 12;

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Provider currency list, sorted by priority then code
    pub currency_universe: Vec<CurrencyCode>,
    pub base_currency: CurrencyCode,
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    /// Last successful rates fetch; replaced wholesale, never patched
    pub latest_snapshot: Option<RateSnapshot>,
    /// Advisory flag, checked by the auto-refresh timer
    pub is_loading: bool,
    /// Raw text of the main amount field
    pub amount: String,
    pub conversion: ConversionView,
    /// Time of the last successful main conversion
    pub last_updated: Option<DateTime<Local>>,
    pub quick_cards: Vec<QuickConvertCard>,
    pub historical_cards: Vec<HistoricalCard>,
    /// Toasts waiting to be shown by the UI
    pub pending_notifications: Vec<Notification>,
    /// Newest main-conversion request issued
    pub(crate) conversion_seq: u64,
    /// Newest rates refresh issued
    pub(crate) refresh_seq: u64,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            currency_universe: Vec::new(),
            base_currency: config.default_base.clone(),
            from_currency: config.default_from.clone(),
            to_currency: config.default_to.clone(),
            latest_snapshot: None,
            is_loading: false,
            amount: config.default_amount.clone(),
            conversion: ConversionView::Pending,
            last_updated: None,
            quick_cards: popular_pairs()
                .into_iter()
                .map(|pair| QuickConvertCard::new(pair, &config.quick_default_amount))
                .collect(),
            historical_cards: historical_pairs().into_iter().map(HistoricalCard::new).collect(),
            pending_notifications: Vec::new(),
            conversion_seq: 0,
            refresh_seq: 0,
        }
    }

    /// Queue a toast for the UI.
    pub fn notify(&mut self, notification: Notification) {
        self.pending_notifications.push(notification);
    }

    /// Cells of the rates grid: the universe minus the quoted base, stable-sorted
    /// by priority tier, at most [`RATE_GRID_SIZE`].
    ///
    /// Rates are quoted against the snapshot's base; while no snapshot exists the
    /// selected base is used and every rate is `None`.
    pub fn rate_grid(&self) -> Vec<RateCell> {
        let base = self.grid_base();
        let mut codes: Vec<&CurrencyCode> = self.currency_universe.iter().filter(|c| *c != base).collect();
        codes.sort_by_key(|c| priority_of(c));

        codes
            .into_iter()
            .take(RATE_GRID_SIZE)
            .map(|code| RateCell {
                code: code.clone(),
                meta: lookup(code),
                rate: self.latest_snapshot.as_ref().and_then(|s| s.rate(code)),
            })
            .collect()
    }

    /// Base the rates grid is quoted against.
    pub fn grid_base(&self) -> &CurrencyCode {
        self.latest_snapshot.as_ref().map(|s| s.base()).unwrap_or(&self.base_currency)
    }
}

/// Main conversion result panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionView {
    /// No conversion has completed yet
    Pending,
    /// Amount is empty, non-positive or unparseable
    Placeholder,
    Ready {
        request: ConversionRequest,
        result: ConversionResult,
    },
    /// Conversion failed after retries; previous data elsewhere is untouched
    Failed(String),
}

/// Inputs of one main conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
}

/// One quick-convert card (popular pair with its own amount field).
#[derive(Debug, Clone, PartialEq)]
pub struct QuickConvertCard {
    pub pair: TradingPair,
    /// Raw text of the card's amount field
    pub amount: String,
    pub result: QuickResult,
    /// Newest request issued for this card
    pub(crate) seq: u64,
}

impl QuickConvertCard {
    pub fn new(pair: TradingPair, amount: &str) -> Self {
        Self {
            pair,
            amount: amount.to_string(),
            result: QuickResult::Pending,
            seq: 0,
        }
    }
}

/// Result cell of a quick-convert card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuickResult {
    /// Not computed yet
    Pending,
    Value(f64),
    /// Amount was non-positive or unparseable; no request made
    Zero,
    /// Conversion failed; logged only
    Failed,
}

impl QuickResult {
    pub fn display(&self) -> String {
        match self {
            QuickResult::Value(v) => format_number(*v, 2),
            QuickResult::Zero => "0.00".to_string(),
            QuickResult::Pending | QuickResult::Failed => PLACEHOLDER.to_string(),
        }
    }
}

/// Historical comparison card for one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalCard {
    pub pair: TradingPair,
    /// `None` while loading
    pub rates: Option<HistoricalRates>,
}

impl HistoricalCard {
    pub fn new(pair: TradingPair) -> Self {
        Self { pair, rates: None }
    }

    pub fn is_loading(&self) -> bool {
        self.rates.is_none()
    }
}

/// Rates of one pair today, 7 days ago and 30 days ago. Each may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HistoricalRates {
    pub current: Option<f64>,
    pub week_ago: Option<f64>,
    pub month_ago: Option<f64>,
}

impl HistoricalRates {
    pub fn change_7d(&self) -> Option<f64> {
        percent_change(self.current, self.week_ago)
    }

    pub fn change_30d(&self) -> Option<f64> {
        percent_change(self.current, self.month_ago)
    }
}

/// One cell of the rates grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RateCell {
    pub code: CurrencyCode,
    pub meta: CurrencyMeta,
    /// Units of `code` per one unit of the grid base
    pub rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Toast queued for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}
