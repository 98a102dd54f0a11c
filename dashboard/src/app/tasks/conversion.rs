//! # Conversion Tasks
//!
//! Async tasks for the main conversion and the quick-convert cards.

use super::guarded;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, ConversionRequest, ConversionView, QuickResult};
use crate::core::service::RateService;
use crate::services::api::ConversionResult;
use crate::utils::validation::parse_amount;
use async_channel::Sender;
use chrono::Local;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Run the main conversion for the current amount and pair.
///
/// Invalid or non-positive amounts short-circuit to the placeholder view and
/// same-currency pairs resolve to a unit rate; neither touches the network.
/// Every call issues a new sequence number, so an older in-flight request can
/// no longer overwrite the result.
pub(crate) fn perform_conversion(state: Arc<RwLock<AppState>>, service: Arc<dyn RateService>, event_tx: Sender<AppEvent>) {
    let (request, seq) = {
        let mut state = state.write();
        state.conversion_seq += 1;
        let seq = state.conversion_seq;

        let amount = match parse_amount(&state.amount) {
            Ok(amount) => amount,
            Err(_) => {
                state.conversion = ConversionView::Placeholder;
                return;
            }
        };

        let request = ConversionRequest {
            from: state.from_currency.clone(),
            to: state.to_currency.clone(),
            amount,
        };

        if request.from == request.to {
            let result = ConversionResult::identity(amount);
            state.conversion = ConversionView::Ready { request, result };
            state.last_updated = Some(Local::now());
            return;
        }

        (request, seq)
    };

    tracing::debug!(from = %request.from, to = %request.to, amount = request.amount, seq, "Converting");

    let (from, to, amount) = (request.from.clone(), request.to.clone(), request.amount);
    spawn(async move {
        let result = guarded(async move { service.convert(&from, &to, amount).await.map_err(|e| e.to_string()) }).await;
        let _ = event_tx.send(AppEvent::ConversionDone { seq, request, result }).await;
    });
}

/// Recompute one quick-convert card.
pub(crate) fn refresh_quick_card(
    state: Arc<RwLock<AppState>>,
    service: Arc<dyn RateService>,
    event_tx: Sender<AppEvent>,
    index: usize,
) {
    let (pair, amount, seq) = {
        let mut state = state.write();
        let Some(card) = state.quick_cards.get_mut(index) else {
            tracing::warn!(index, "Quick-convert card does not exist");
            return;
        };
        card.seq += 1;

        match parse_amount(&card.amount) {
            Ok(amount) => (card.pair, amount, card.seq),
            Err(_) => {
                card.result = QuickResult::Zero;
                return;
            }
        }
    };

    spawn(async move {
        let result = guarded(async move {
            service
                .convert(&pair.from_code(), &pair.to_code(), amount)
                .await
                .map_err(|e| e.to_string())
        })
        .await;
        let _ = event_tx.send(AppEvent::QuickConversionDone { index, seq, result }).await;
    });
}

/// Recompute every quick-convert card.
pub(crate) fn refresh_all_quick_cards(
    state: Arc<RwLock<AppState>>,
    service: Arc<dyn RateService>,
    event_tx: Sender<AppEvent>,
) {
    let count = state.read().quick_cards.len();
    for index in 0..count {
        refresh_quick_card(Arc::clone(&state), Arc::clone(&service), event_tx.clone(), index);
    }
}
