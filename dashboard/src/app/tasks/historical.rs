//! # Historical Tasks
//!
//! Async tasks for the 7-day / 30-day comparison cards.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, HistoricalRates};
use crate::core::service::RateService;
use async_channel::Sender;
use chrono::{Duration, Local, NaiveDate};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Days back of the two comparison periods.
pub const WEEK_DAYS: i64 = 7;
pub const MONTH_DAYS: i64 = 30;

/// Dates queried for one card: today, a week ago, a month ago.
pub fn comparison_dates(today: NaiveDate) -> [NaiveDate; 3] {
    [today, today - Duration::days(WEEK_DAYS), today - Duration::days(MONTH_DAYS)]
}

/// Reload every historical card. Each card is fetched by its own task and fails
/// independently; missing periods come back as `None`.
pub(crate) fn load_historical_cards(state: Arc<RwLock<AppState>>, service: Arc<dyn RateService>, event_tx: Sender<AppEvent>) {
    load_historical_cards_on(state, service, event_tx, Local::now().date_naive());
}

pub(crate) fn load_historical_cards_on(
    state: Arc<RwLock<AppState>>,
    service: Arc<dyn RateService>,
    event_tx: Sender<AppEvent>,
    today: NaiveDate,
) {
    let pairs: Vec<_> = {
        let mut state = state.write();
        for card in state.historical_cards.iter_mut() {
            card.rates = None;
        }
        state.historical_cards.iter().map(|card| card.pair).collect()
    };

    let [today, week_ago, month_ago] = comparison_dates(today);

    for (index, pair) in pairs.into_iter().enumerate() {
        let service = Arc::clone(&service);
        let event_tx = event_tx.clone();

        spawn(async move {
            let (from, to) = (pair.from_code(), pair.to_code());
            let (current, week, month) = tokio::join!(
                service.historical_rate(&from, &to, today),
                service.historical_rate(&from, &to, week_ago),
                service.historical_rate(&from, &to, month_ago),
            );

            let rates = HistoricalRates {
                current,
                week_ago: week,
                month_ago: month,
            };
            if rates.current.is_none() {
                tracing::warn!(from = %from, to = %to, "No current historical rate");
            }
            let _ = event_tx.send(AppEvent::HistoricalCardLoaded { index, rates }).await;
        });
    }
}
